//! Field and layout markup emission
//!
//! Small fragment builders the compiler assembles into the document body.
//! All values are emitted verbatim; the dashboard operator is trusted.

use leadstack_common::{FieldType, LeadField};

use crate::config::FormConfig;
use crate::validation::{PRIVACY_CONSENT_NAME, TERMS_CONSENT_NAME};

const REQUIRED_MARK: &str = " <span class=\"required-asterisk\">*</span>";

fn label_text(field: &LeadField) -> String {
    if field.required {
        format!("{}{}", field.label, REQUIRED_MARK)
    } else {
        field.label.clone()
    }
}

/// One complete field block: control plus label, wrapped in a form-group.
pub(crate) fn field_block(field: &LeadField) -> String {
    let field_id = format!("field-{}", field.name);
    let required_attr = if field.required { " required" } else { "" };
    let placeholder = format!(
        " placeholder=\"Inserisci {}\"",
        field.label.to_lowercase()
    );
    let label = format!(
        "<label for=\"{}\">{}</label>",
        field_id,
        label_text(field)
    );

    // Radio and checkbox carry their own wrapper classes and return early;
    // the remaining shapes share the plain form-group wrapper.
    let control = match field.field_type {
        FieldType::Textarea => format!(
            "<textarea id=\"{id}\" name=\"{name}\"{placeholder}{required}></textarea>",
            id = field_id,
            name = field.name,
            placeholder = placeholder,
            required = required_attr,
        ),
        FieldType::Select => {
            let mut options = String::new();
            for opt in &field.options {
                let opt = opt.trim();
                options.push_str(&format!(
                    "<option value=\"{opt}\">{opt}</option>",
                    opt = opt
                ));
            }
            format!(
                "<select id=\"{id}\" name=\"{name}\"{required}>\
                 <option value=\"\" disabled selected>Seleziona un'opzione</option>\
                 {options}</select>",
                id = field_id,
                name = field.name,
                required = required_attr,
                options = options,
            )
        }
        FieldType::Radio => {
            let mut options = String::new();
            for (index, opt) in field.options.iter().enumerate() {
                let opt = opt.trim();
                // The required attribute lands on the first option only;
                // same-named radios share one native validity state, and the
                // emitted script checks the group as a whole anyway.
                let required = if index == 0 && field.required {
                    " required"
                } else {
                    ""
                };
                options.push_str(&format!(
                    "<div class=\"radio-option\">\
                     <input type=\"radio\" id=\"{id}-{index}\" name=\"{name}\" value=\"{opt}\"{required}>\
                     <label for=\"{id}-{index}\">{opt}</label>\
                     </div>",
                    id = field_id,
                    index = index,
                    name = field.name,
                    opt = opt,
                    required = required,
                ));
            }
            return format!(
                "<div class=\"form-group radio-group\">\
                 <label>{label}</label>\
                 <div class=\"radio-options-wrapper\">{options}</div>\
                 </div>",
                label = label_text(field),
                options = options,
            );
        }
        FieldType::Checkbox => {
            return format!(
                "<div class=\"form-group checkbox-group\">\
                 <div class=\"checkbox-wrapper\">\
                 <input type=\"checkbox\" id=\"{id}\" name=\"{name}\" value=\"true\"{required}>\
                 <label for=\"{id}\">{label}</label>\
                 </div></div>",
                id = field_id,
                name = field.name,
                required = required_attr,
                label = label_text(field),
            );
        }
        FieldType::File => format!(
            "<input type=\"file\" id=\"{id}\" name=\"{name}\"{required}>",
            id = field_id,
            name = field.name,
            required = required_attr,
        ),
        FieldType::Text
        | FieldType::Email
        | FieldType::Url
        | FieldType::Tel
        | FieldType::Number
        | FieldType::Date
        | FieldType::Time
        | FieldType::Password => format!(
            "<input type=\"{input_type}\" id=\"{id}\" name=\"{name}\"{placeholder}{required}>",
            input_type = field.field_type.html_input_type(),
            id = field_id,
            name = field.name,
            placeholder = placeholder,
            required = required_attr,
        ),
    };

    format!("<div class=\"form-group\">{}{}</div>", label, control)
}

fn consent_block(name: &str, accept_text: &str, link_label: &str, url: &str, checked: bool) -> String {
    let link = if url.is_empty() {
        link_label.to_string()
    } else {
        format!(
            "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{label}</a>",
            url = url,
            label = link_label,
        )
    };
    let checked_attr = if checked { " checked" } else { "" };
    format!(
        "<div class=\"form-group checkbox-group consent-group\">\
         <div class=\"checkbox-wrapper\">\
         <input type=\"checkbox\" id=\"{name}\" name=\"{name}\" value=\"true\" required{checked}>\
         <label for=\"{name}\">{accept} {link}.<span class=\"required-asterisk\">*</span></label>\
         </div></div>",
        name = name,
        checked = checked_attr,
        accept = accept_text,
        link = link,
    )
}

/// Consent checkboxes for the final (or only) step.
pub(crate) fn consent_blocks(config: &FormConfig) -> String {
    let mut html = String::new();
    if config.privacy_policy.enabled {
        html.push_str(&consent_block(
            PRIVACY_CONSENT_NAME,
            "Ho letto e accetto la",
            "Privacy Policy",
            &config.privacy_policy.url,
            config.privacy_policy.checked_by_default,
        ));
    }
    if config.terms.enabled {
        html.push_str(&consent_block(
            TERMS_CONSENT_NAME,
            "Ho letto e accetto i",
            "Termini e Condizioni",
            &config.terms.url,
            config.terms.checked_by_default,
        ));
    }
    html
}

fn submit_button(config: &FormConfig) -> String {
    format!(
        "<button type=\"submit\" class=\"btn-primary\">{}</button>",
        config.style.submit_label()
    )
}

/// All fields in one ungrouped grid: the single-step layout.
pub(crate) fn single_grid(fields: &[LeadField], config: &FormConfig) -> String {
    let mut html = String::from("<div class=\"form-grid\">");
    for field in fields {
        html.push_str(&field_block(field));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        "<div class=\"consents-container\">{}</div>",
        consent_blocks(config)
    ));
    html.push_str(&format!(
        "<div class=\"buttons\"><span></span>{}</div>",
        submit_button(config)
    ));
    html
}

/// Step wrappers for the multi-step layout. `steps` is already normalized:
/// index 0 is step 1, and the caller guarantees at least two entries.
pub(crate) fn step_sections(steps: &[Vec<&LeadField>], config: &FormConfig) -> String {
    let total = steps.len();
    let mut html = String::new();
    for (index, step_fields) in steps.iter().enumerate() {
        let number = index + 1;
        let active = if index == 0 { " active" } else { "" };
        html.push_str(&format!("<!-- STEP {} -->", number));
        html.push_str(&format!(
            "<div class=\"form-step{active}\" data-step=\"{number}\">",
            active = active,
            number = number,
        ));
        html.push_str(&format!(
            "<h3 class=\"step-title\">Passaggio {} di {}</h3>",
            number, total
        ));
        html.push_str("<div class=\"form-grid\">");
        for field in step_fields {
            html.push_str(&field_block(field));
        }
        html.push_str("</div>");
        if number == total {
            html.push_str(&format!(
                "<div class=\"consents-container\">{}</div>",
                consent_blocks(config)
            ));
        }
        html.push_str("<div class=\"buttons\">");
        if index > 0 {
            html.push_str("<button type=\"button\" class=\"btn-secondary prev\">Indietro</button>");
        } else {
            html.push_str("<span></span>");
        }
        if number < total {
            html.push_str("<button type=\"button\" class=\"btn-primary next\">Avanti</button>");
        } else {
            html.push_str(&submit_button(config));
        }
        html.push_str("</div></div>");
    }
    html
}

/// Step dots plus the connecting bar; emitted only in multi-step mode.
pub(crate) fn progress_indicator(total: usize) -> String {
    let mut html = String::from(
        "<div class=\"progress-container\">\
         <div class=\"progress-bar\" id=\"progressBar\"></div>",
    );
    for number in 1..=total {
        html.push_str(&format!(
            "<div class=\"progress-step active\" data-step-indicator=\"{number}\">{number}</div>",
            number = number,
        ));
    }
    html.push_str("</div>");
    html
}

/// Optional form heading.
pub(crate) fn title_heading(config: &FormConfig) -> String {
    if config.show_title {
        format!("<h2>{}</h2>", config.title)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadstack_common::FieldType;

    #[test]
    fn test_text_field_block_has_label_placeholder_and_input() {
        let field = LeadField::new("nome", "Nome", FieldType::Text).required();
        let html = field_block(&field);
        assert!(html.contains("<label for=\"field-nome\">Nome <span class=\"required-asterisk\">*</span></label>"));
        assert!(html.contains("placeholder=\"Inserisci nome\""));
        assert!(html.contains("<input type=\"text\" id=\"field-nome\" name=\"nome\""));
        assert!(html.contains(" required"));
    }

    #[test]
    fn test_select_options_are_trimmed_with_disabled_placeholder_first() {
        let field = LeadField::new("citta", "Città", FieldType::Select)
            .with_options([" Roma ", "Milano"]);
        let html = field_block(&field);
        let placeholder_at = html
            .find("<option value=\"\" disabled selected>Seleziona un'opzione</option>")
            .unwrap();
        let roma_at = html.find("<option value=\"Roma\">Roma</option>").unwrap();
        assert!(placeholder_at < roma_at);
        assert!(!html.contains(" Roma "));
    }

    #[test]
    fn test_radio_required_attribute_on_first_option_only() {
        let field = LeadField::new("colore", "Colore", FieldType::Radio)
            .with_options(["Rosso", "Verde", "Blu"])
            .required();
        let html = field_block(&field);
        assert!(html.contains("value=\"Rosso\" required"));
        assert!(!html.contains("value=\"Verde\" required"));
        assert!(!html.contains("value=\"Blu\" required"));
        // all options share the field name so they form one group
        assert_eq!(html.matches("name=\"colore\"").count(), 3);
    }

    #[test]
    fn test_checkbox_submits_true_when_checked() {
        let field = LeadField::new("newsletter", "Newsletter", FieldType::Checkbox);
        let html = field_block(&field);
        assert!(html.contains("value=\"true\""));
        assert!(!html.contains(" required"));
    }

    #[test]
    fn test_consent_link_falls_back_to_plain_text() {
        let mut config = FormConfig::default();
        config.privacy_policy.enabled = true;
        let html = consent_blocks(&config);
        assert!(html.contains("Privacy Policy"));
        assert!(!html.contains("<a href"));

        config.privacy_policy.url = "https://example.com/privacy".into();
        let html = consent_blocks(&config);
        assert!(html.contains("<a href=\"https://example.com/privacy\""));
    }

    #[test]
    fn test_consent_checked_by_default_is_still_required() {
        let mut config = FormConfig::default();
        config.terms.enabled = true;
        config.terms.checked_by_default = true;
        let html = consent_blocks(&config);
        assert!(html.contains("name=\"terms_consent\""));
        assert!(html.contains("required checked"));
    }

    #[test]
    fn test_progress_indicator_numbers_every_step() {
        let html = progress_indicator(3);
        assert!(html.contains("data-step-indicator=\"1\""));
        assert!(html.contains("data-step-indicator=\"3\""));
        assert!(html.contains("id=\"progressBar\""));
    }
}
