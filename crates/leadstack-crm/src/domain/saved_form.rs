//! Saved form configurations
//!
//! The generator persists its configuration, never the compiled HTML: a
//! saved form is reloaded into the designer and recompiled on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use leadstack_common::EntityId;
use leadstack_formgen::FormConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedForm {
    pub id: EntityId,
    pub name: String,
    pub client_id: EntityId,
    pub service_name: String,
    pub config: FormConfig,
    pub created_at: DateTime<Utc>,
}

impl SavedForm {
    pub fn new(
        name: impl Into<String>,
        client_id: EntityId,
        service_name: impl Into<String>,
        config: FormConfig,
    ) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            client_id,
            service_name: service_name.into(),
            config,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_form_round_trips_its_config() {
        let mut config = FormConfig::default();
        config.webhook_url = "https://hooks.example.com/lead".into();
        let form = SavedForm::new(
            "Tagliando marzo",
            EntityId::from_string("client-1"),
            "Tagliando",
            config,
        );

        let json = serde_json::to_string(&form).unwrap();
        let back: SavedForm = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Tagliando marzo");
        assert_eq!(back.config.webhook_url, "https://hooks.example.com/lead");
    }
}
