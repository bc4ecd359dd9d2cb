//! Required-field gate, mirrored natively
//!
//! The authoritative gate runs inside the generated document's script; this
//! module reimplements the same rules over a submitted value map so the
//! dashboard can check a submission shape without a browser, and so the gate
//! semantics stay covered by unit tests. Rules:
//!
//! - text-like inputs: trimmed value must be non-empty
//! - checkboxes: must be checked (a checked box submits its value)
//! - radios: any selected option in the group counts, independent of which
//!   option markup carries the `required` attribute
//!
//! A checked control appears in the value map under its field name; an
//! unchecked one is absent, matching `FormData` semantics.

use std::collections::HashMap;

use leadstack_common::{FieldType, LeadField};

use crate::config::FormConfig;

/// Reserved name of the privacy-policy consent checkbox.
pub const PRIVACY_CONSENT_NAME: &str = "privacy_policy_consent";
/// Reserved name of the terms consent checkbox.
pub const TERMS_CONSENT_NAME: &str = "terms_consent";

/// Whether one field passes the required gate for the given values.
pub fn field_satisfied(field: &LeadField, values: &HashMap<String, String>) -> bool {
    if !field.required {
        return true;
    }
    match field.field_type {
        FieldType::Checkbox | FieldType::Radio => values
            .get(&field.name)
            .map_or(false, |value| !value.is_empty()),
        FieldType::Text
        | FieldType::Email
        | FieldType::Textarea
        | FieldType::Url
        | FieldType::Tel
        | FieldType::Select
        | FieldType::Number
        | FieldType::Date
        | FieldType::Time
        | FieldType::File
        | FieldType::Password => values
            .get(&field.name)
            .map_or(false, |value| !value.trim().is_empty()),
    }
}

/// Gate for one step: every required field in the step must be satisfied.
pub fn validate_step(step_fields: &[&LeadField], values: &HashMap<String, String>) -> bool {
    step_fields.iter().all(|field| field_satisfied(field, values))
}

/// Gate for the whole form including enabled consents.
pub fn validate_submission(
    fields: &[LeadField],
    config: &FormConfig,
    values: &HashMap<String, String>,
) -> bool {
    let fields_ok = fields.iter().all(|field| field_satisfied(field, values));
    let privacy_ok = !config.privacy_policy.enabled || checked(values, PRIVACY_CONSENT_NAME);
    let terms_ok = !config.terms.enabled || checked(values, TERMS_CONSENT_NAME);
    fields_ok && privacy_ok && terms_ok
}

fn checked(values: &HashMap<String, String>, name: &str) -> bool {
    values.get(name).map_or(false, |value| value == "true")
}
