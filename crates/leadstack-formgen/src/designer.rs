//! Form designer session
//!
//! Holds the mutable editing state behind the generator screen: which client
//! and service are targeted, the form configuration, and the live preview.
//! Every mutation recompiles the preview; compilation is pure, so the
//! preview is always exactly the artifact the operator would copy out.
//!
//! Nothing here signals errors: selecting an unknown client or a client
//! without services simply yields an empty preview, rendered upstream as a
//! placeholder prompt.

use tracing::debug;

use leadstack_common::{Client, LeadField};

use crate::compiler::{compile, CompileRequest, CompiledForm};
use crate::config::FormConfig;

pub struct FormDesigner {
    clients: Vec<Client>,
    selected_client_id: String,
    selected_service: String,
    config: FormConfig,
    preview: CompiledForm,
}

impl FormDesigner {
    /// Start a session over a snapshot of the client list. Nothing is
    /// selected yet, so the preview starts empty.
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            clients,
            selected_client_id: String::new(),
            selected_service: String::new(),
            config: FormConfig::default(),
            preview: CompiledForm::empty(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn selected_client(&self) -> Option<&Client> {
        self.clients
            .iter()
            .find(|c| c.id.as_str() == self.selected_client_id)
    }

    pub fn selected_service_name(&self) -> &str {
        &self.selected_service
    }

    /// Field list of the current client/service pair, declared order.
    pub fn fields(&self) -> &[LeadField] {
        self.selected_client()
            .and_then(|c| c.service(&self.selected_service))
            .map(|s| s.fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn preview(&self) -> &CompiledForm {
        &self.preview
    }

    /// Target a client. If the previously selected service name does not
    /// exist under the new client, fall back to its first service; a client
    /// with no services clears the selection. The field list changes either
    /// way, so step assignments reset to a fresh single-step layout.
    pub fn select_client(&mut self, client_id: &str) {
        self.selected_client_id = client_id.to_string();
        let service_names: Vec<String> = self
            .selected_client()
            .map(|c| c.services.iter().map(|s| s.name.clone()).collect())
            .unwrap_or_default();
        if service_names.is_empty() {
            self.selected_service.clear();
        } else if !service_names.contains(&self.selected_service) {
            self.selected_service = service_names[0].clone();
        }
        self.reset_steps();
        self.recompile();
    }

    /// Target a service of the current client by name.
    pub fn select_service(&mut self, service_name: &str) {
        self.selected_service = service_name.to_string();
        self.reset_steps();
        self.recompile();
    }

    /// Assign a field to a step (clamped to a minimum of 1), keyed by field
    /// name so assignments survive reordering and never collide by position.
    pub fn set_step(&mut self, field_name: &str, step: u32) {
        self.config.set_step(field_name, step);
        self.recompile();
    }

    /// Toggle multi-step mode. Enabling it over a flat layout with more than
    /// two fields distributes them two per step in declared order as a
    /// starting point; disabling keeps the assignments for later.
    pub fn set_multi_step(&mut self, enabled: bool) {
        self.config.multi_step = enabled;
        if enabled {
            let names: Vec<String> = self.fields().iter().map(|f| f.name.clone()).collect();
            let distinct: std::collections::BTreeSet<u32> =
                names.iter().map(|n| self.config.step_of(n)).collect();
            if distinct.len() <= 1 && names.len() > 2 {
                for (index, name) in names.into_iter().enumerate() {
                    self.config.set_step(name, (index as u32) / 2 + 1);
                }
            }
        }
        self.recompile();
    }

    /// Replace the whole configuration, e.g. when loading a saved form.
    pub fn set_config(&mut self, config: FormConfig) {
        self.config = config;
        self.recompile();
    }

    /// Apply an edit to the configuration and recompile once.
    pub fn edit_config(&mut self, edit: impl FnOnce(&mut FormConfig)) {
        edit(&mut self.config);
        self.recompile();
    }

    fn reset_steps(&mut self) {
        let names: Vec<String> = self.fields().iter().map(|f| f.name.clone()).collect();
        self.config.field_steps = names.into_iter().map(|n| (n, 1)).collect();
        self.config.multi_step = false;
    }

    fn recompile(&mut self) {
        let compiled = match self.selected_client() {
            Some(client) => {
                let fields = client
                    .service(&self.selected_service)
                    .map(|s| s.fields.as_slice())
                    .unwrap_or(&[]);
                let request = CompileRequest {
                    client_id: client.id.as_str(),
                    service_name: &self.selected_service,
                    fields,
                    config: &self.config,
                };
                let compiled = compile(&request);
                debug!(
                    client = request.client_id,
                    service = request.service_name,
                    bytes = compiled.as_str().len(),
                    "form preview recompiled"
                );
                compiled
            }
            None => CompiledForm::empty(),
        };
        self.preview = compiled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadstack_common::{EntityId, FieldType, Service};

    fn client(name: &str, services: Vec<Service>) -> Client {
        Client {
            id: EntityId::from_string(format!("id-{name}")),
            name: name.into(),
            user_id: EntityId::new(),
            services,
        }
    }

    fn four_field_service(name: &str) -> Service {
        Service::new(
            name,
            vec![
                LeadField::new("nome", "Nome", FieldType::Text),
                LeadField::new("mail", "Mail", FieldType::Email),
                LeadField::new("telefono", "Telefono", FieldType::Tel),
                LeadField::new("note", "Note", FieldType::Textarea),
            ],
        )
    }

    fn designer() -> FormDesigner {
        FormDesigner::new(vec![
            client("rossi", vec![four_field_service("Tagliando"), four_field_service("Gomme")]),
            client("bianchi", vec![four_field_service("Preventivo")]),
            client("vuoto", vec![]),
        ])
    }

    #[test]
    fn test_preview_is_empty_until_a_client_is_selected() {
        let designer = designer();
        assert!(designer.preview().is_empty());
    }

    #[test]
    fn test_selecting_a_client_targets_its_first_service() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        assert_eq!(designer.selected_service_name(), "Tagliando");
        assert!(!designer.preview().is_empty());
        assert_eq!(designer.fields().len(), 4);
    }

    #[test]
    fn test_switching_client_keeps_service_name_when_it_exists() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.select_service("Gomme");
        designer.select_client("id-bianchi");
        // "Gomme" does not exist under bianchi: fall back to first
        assert_eq!(designer.selected_service_name(), "Preventivo");
    }

    #[test]
    fn test_client_without_services_clears_the_selection() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.select_client("id-vuoto");
        assert_eq!(designer.selected_service_name(), "");
        assert!(designer.fields().is_empty());
        // still compiles: an empty form, not an error
        assert!(!designer.preview().is_empty());
    }

    #[test]
    fn test_unknown_client_yields_empty_preview() {
        let mut designer = designer();
        designer.select_client("id-ignoto");
        assert!(designer.preview().is_empty());
    }

    #[test]
    fn test_step_assignment_clamps_and_recompiles() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.set_step("nome", 0);
        assert_eq!(designer.config().step_of("nome"), 1);
    }

    #[test]
    fn test_enabling_multi_step_distributes_two_per_step() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.set_multi_step(true);
        let config = designer.config();
        assert_eq!(config.step_of("nome"), 1);
        assert_eq!(config.step_of("mail"), 1);
        assert_eq!(config.step_of("telefono"), 2);
        assert_eq!(config.step_of("note"), 2);
        assert!(designer.preview().as_str().contains("Passaggio 1 di 2"));
    }

    #[test]
    fn test_enabling_multi_step_keeps_existing_spread() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.set_step("note", 5);
        designer.set_multi_step(true);
        // an explicit assignment already spread the fields: no auto layout
        assert_eq!(designer.config().step_of("nome"), 1);
        assert_eq!(designer.config().step_of("note"), 5);
    }

    #[test]
    fn test_disabling_multi_step_retains_assignments() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.set_multi_step(true);
        designer.set_multi_step(false);
        assert_eq!(designer.config().step_of("telefono"), 2);
        // flat layout again while disabled
        assert!(!designer.preview().as_str().contains("class=\"form-step"));
    }

    #[test]
    fn test_changing_service_resets_steps() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.set_multi_step(true);
        designer.select_service("Gomme");
        assert!(!designer.config().multi_step);
        assert_eq!(designer.config().step_of("telefono"), 1);
    }

    #[test]
    fn test_config_edits_show_up_in_the_preview() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        designer.edit_config(|config| {
            config.style.submit_button_text = "Prenota ora".into();
            config.webhook_url = "https://hooks.example.com/lead".into();
        });
        let html = designer.preview().as_str();
        assert!(html.contains(">Prenota ora</button>"));
        assert!(html.contains("https://hooks.example.com/lead"));
    }

    #[test]
    fn test_recompilation_is_idempotent_apart_from_the_scope_id() {
        let mut designer = designer();
        designer.select_client("id-rossi");
        let first = designer.preview().clone();
        designer.select_service("Tagliando");
        let second = designer.preview().clone();

        let strip = |html: &str| {
            html.replace(
                html.split("lf-wrapper-")
                    .nth(1)
                    .and_then(|rest| rest.split(|c: char| !c.is_ascii_digit()).next())
                    .map(|n| format!("lf-wrapper-{n}"))
                    .unwrap_or_default()
                    .as_str(),
                "lf-wrapper-X",
            )
        };
        assert_eq!(strip(first.as_str()), strip(second.as_str()));
    }
}
