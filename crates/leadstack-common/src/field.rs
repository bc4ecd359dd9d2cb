//! Field and service model
//!
//! A `Service` is one lead-capture scenario offered by a client (e.g. an
//! oil-change booking); its ordered `LeadField` list drives both the form
//! compiler and the stored lead payload shape.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// The closed set of input kinds a service field can declare.
///
/// The form compiler matches over this enum exhaustively; adding a variant
/// without a corresponding markup arm is a compile error, not a runtime
/// fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Textarea,
    Url,
    Tel,
    Radio,
    Select,
    Checkbox,
    Number,
    Date,
    Time,
    File,
    Password,
}

impl FieldType {
    /// The HTML `type` attribute for variants rendered as a native
    /// single-line input. Textarea, select and radio have their own
    /// elements and never reach this.
    pub fn html_input_type(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Checkbox => "checkbox",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::File => "file",
            Self::Password => "password",
            Self::Textarea | Self::Select | Self::Radio => "text",
        }
    }
}

/// One data point collected from an end user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LeadField {
    /// Unique key within the owning service; also the submitted payload key.
    pub name: String,
    /// Display text shown next to the control.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Ordered option labels, meaningful only for select/radio.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
}

impl LeadField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            options: vec![],
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// A named group of fields representing one lead-capture scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Service {
    pub id: EntityId,
    pub name: String,
    /// Declaration order is preserved end-to-end.
    pub fields: Vec<LeadField>,
}

impl Service {
    pub fn new(name: impl Into<String>, fields: Vec<LeadField>) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            fields,
        }
    }
}

/// A client as the form compiler sees it: identity plus the services it
/// exposes. The full account aggregate lives in the CRM crate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub user_id: EntityId,
    pub services: Vec<Service>,
}

impl Client {
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_wire_names_are_lowercase() {
        let json = serde_json::to_string(&FieldType::Textarea).unwrap();
        assert_eq!(json, "\"textarea\"");
        let back: FieldType = serde_json::from_str("\"tel\"").unwrap();
        assert_eq!(back, FieldType::Tel);
    }

    #[test]
    fn test_lead_field_deserializes_store_shape() {
        let field: LeadField = serde_json::from_str(
            r#"{"name":"colore","label":"Colore","type":"radio","options":["Rosso","Blu"],"required":true}"#,
        )
        .unwrap();
        assert_eq!(field.field_type, FieldType::Radio);
        assert_eq!(field.options, vec!["Rosso", "Blu"]);
        assert!(field.required);
    }

    #[test]
    fn test_optional_flags_default_off() {
        let field: LeadField =
            serde_json::from_str(r#"{"name":"mail","label":"Mail","type":"email"}"#).unwrap();
        assert!(!field.required);
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_service_lookup_by_name() {
        let client = Client {
            id: EntityId::new(),
            name: "Officina Rossi".into(),
            user_id: EntityId::new(),
            services: vec![Service::new("Tagliando", vec![])],
        };
        assert!(client.service("Tagliando").is_some());
        assert!(client.service("Gomme").is_none());
    }
}
