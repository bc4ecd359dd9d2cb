//! Lead aggregate
//!
//! One end-user submission, tagged with the client and service that captured
//! it. The `data` payload is whatever the generated form collected, plus the
//! `ip_address`/`user_agent` keys its script attaches.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leadstack_common::EntityId;

/// Pipeline status. Wire names are the Italian strings the deployed store
/// already holds, so existing rows keep deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    #[serde(rename = "Nuovo")]
    New,
    #[serde(rename = "Contattato")]
    Contacted,
    #[serde(rename = "In Lavorazione")]
    InProgress,
    #[serde(rename = "Perso")]
    Lost,
    #[serde(rename = "Vinto")]
    Won,
}

impl LeadStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// Free-text annotation attached to a lead by an operator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: EntityId::new(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Lead {
    id: EntityId,
    client_id: EntityId,
    data: HashMap<String, String>,
    service: String,
    status: LeadStatus,
    value: Option<f64>,
    notes: Vec<Note>,
    created_at: DateTime<Utc>,
}

impl Lead {
    pub fn create(
        client_id: EntityId,
        data: HashMap<String, String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            id: EntityId::new(),
            client_id,
            data,
            service: service.into(),
            status: LeadStatus::New,
            value: None,
            notes: vec![],
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn client_id(&self) -> &EntityId {
        &self.client_id
    }

    pub fn data(&self) -> &HashMap<String, String> {
        &self.data
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn status(&self) -> LeadStatus {
        self.status
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_status(&mut self, status: LeadStatus) {
        self.status = status;
    }

    /// Estimated or closed deal value, used by the spend analytics.
    pub fn set_value(&mut self, value: Option<f64>) {
        self.value = value;
    }

    pub fn add_note(&mut self, content: impl Into<String>) {
        self.notes.push(Note::new(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead() -> Lead {
        let mut data = HashMap::new();
        data.insert("nome".to_string(), "Anna".to_string());
        Lead::create(EntityId::from_string("client-1"), data, "Tagliando")
    }

    #[test]
    fn test_new_lead_defaults_to_nuovo() {
        let lead = lead();
        assert_eq!(lead.status(), LeadStatus::New);
        assert!(lead.notes().is_empty());
        assert!(!lead.status().is_closed());
    }

    #[test]
    fn test_status_wire_names_are_italian() {
        let json = serde_json::to_string(&LeadStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Lavorazione\"");
        let back: LeadStatus = serde_json::from_str("\"Vinto\"").unwrap();
        assert_eq!(back, LeadStatus::Won);
        assert!(back.is_closed());
    }

    #[test]
    fn test_notes_accumulate_in_order() {
        let mut lead = lead();
        lead.add_note("richiamare lunedì");
        lead.add_note("preventivo inviato");
        assert_eq!(lead.notes().len(), 2);
        assert_eq!(lead.notes()[0].content, "richiamare lunedì");
    }

    #[test]
    fn test_lead_serializes_store_row_shape() {
        let lead = lead();
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["status"], "Nuovo");
        assert_eq!(json["service"], "Tagliando");
        assert_eq!(json["data"]["nome"], "Anna");
    }
}
