//! Command objects

use std::collections::HashMap;

use chrono::NaiveDate;

use leadstack_common::{EntityId, Service};
use leadstack_formgen::FormConfig;

use crate::domain::{AdPlatform, LeadStatus};

pub struct CreateClientCommand {
    pub name: String,
    pub username: String,
    pub password: String,
    pub services: Vec<Service>,
}

pub struct UpdateClientCommand {
    pub client_id: EntityId,
    pub name: Option<String>,
    pub services: Option<Vec<Service>>,
}

pub struct AddLeadCommand {
    pub client_id: EntityId,
    pub data: HashMap<String, String>,
    pub service: String,
    pub status: Option<LeadStatus>,
    pub value: Option<f64>,
}

pub struct AddSpendCommand {
    pub client_id: EntityId,
    pub service: String,
    pub platform: AdPlatform,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub struct SaveFormCommand {
    pub name: String,
    pub client_id: EntityId,
    pub service_name: String,
    pub config: FormConfig,
}
