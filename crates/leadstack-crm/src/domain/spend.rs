//! Advertising spend records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use leadstack_common::EntityId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdPlatform {
    Meta,
    Google,
    TikTok,
}

/// One budget entry: what a client spent on a platform for a service over a
/// date range. Amounts are plain numbers, as stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdSpend {
    pub id: EntityId,
    pub client_id: EntityId,
    pub service: String,
    pub platform: AdPlatform,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl AdSpend {
    pub fn new(
        client_id: EntityId,
        service: impl Into<String>,
        platform: AdPlatform,
        amount: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: EntityId::new(),
            client_id,
            service: service.into(),
            platform,
            amount,
            start_date,
            end_date,
            created_at: Utc::now(),
        }
    }

    /// Whether the spend window overlaps the given range, boundaries
    /// included.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}
