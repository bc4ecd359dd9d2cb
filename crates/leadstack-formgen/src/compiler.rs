//! Form code compiler
//!
//! One pure function from a configuration snapshot to a standalone HTML
//! document. Deterministic for a given scope id; the only varying token
//! across otherwise identical compilations is the wrapper id itself.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use leadstack_common::LeadField;

use crate::config::FormConfig;
use crate::{markup, script, style};

// Wrapper ids only need to be unique among forms rendered together on one
// host page; a process-wide sequence covers that.
static SCOPE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_scope_id() -> String {
    format!("lf-wrapper-{}", SCOPE_SEQUENCE.fetch_add(1, Ordering::Relaxed))
}

/// Everything one compilation reads. Borrowed: the compiler takes a fresh
/// snapshot per call and never holds state across calls.
#[derive(Clone, Copy, Debug)]
pub struct CompileRequest<'a> {
    pub client_id: &'a str,
    pub service_name: &'a str,
    pub fields: &'a [LeadField],
    pub config: &'a FormConfig,
}

/// The output artifact: one immutable HTML document. Regenerated whole on
/// every configuration change, never patched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledForm(String);

impl CompiledForm {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for CompiledForm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CompiledForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compile with a freshly allocated wrapper id.
pub fn compile(request: &CompileRequest<'_>) -> CompiledForm {
    compile_with_scope_id(request, &next_scope_id())
}

/// Compile under an explicit wrapper id. Byte-identical output for identical
/// input; `compile` is this plus the id sequence.
pub fn compile_with_scope_id(request: &CompileRequest<'_>, scope_id: &str) -> CompiledForm {
    let steps = normalized_steps(request.fields, request.config);
    // A wizard shell around a single step is pointless; fall back to the
    // flat grid unless at least two distinct steps survive normalization.
    let multi = steps.len() > 1;

    let config = request.config;
    let title_tag = if config.title.trim().is_empty() {
        format!("Richiedi informazioni - {}", request.service_name)
    } else {
        config.title.clone()
    };

    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!doctype html>\n<html lang=\"it\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
    out.push_str(&format!("<title>{}</title>\n", title_tag));
    out.push_str("<style>");
    out.push_str(&style::stylesheet(scope_id, &config.style));
    out.push_str("</style>\n</head>\n<body>\n");

    out.push_str(&format!("<div id=\"{}\">\n", scope_id));
    out.push_str("<form id=\"leadForm\" novalidate>\n");
    out.push_str(&markup::title_heading(config));
    if multi {
        out.push_str(&markup::progress_indicator(steps.len()));
        out.push_str(&markup::step_sections(&steps, config));
    } else {
        out.push_str(&markup::single_grid(request.fields, config));
    }
    out.push_str("<div id=\"feedback\"></div>\n");
    out.push_str("</form>\n</div>\n");

    out.push_str("<script type=\"module\">");
    out.push_str(&script::module_script(
        scope_id,
        request.client_id,
        request.service_name,
        config,
    ));
    out.push_str("</script>\n</body>\n</html>");

    CompiledForm(out)
}

/// Group fields by assigned step and collapse gaps: the distinct assignment
/// values, sorted ascending, become steps 1..N. Off mode yields no grouping
/// at all.
fn normalized_steps<'a>(fields: &'a [LeadField], config: &FormConfig) -> Vec<Vec<&'a LeadField>> {
    if !config.multi_step {
        return Vec::new();
    }
    let mut by_step: BTreeMap<u32, Vec<&LeadField>> = BTreeMap::new();
    for field in fields {
        by_step
            .entry(config.step_of(&field.name))
            .or_default()
            .push(field);
    }
    by_step.into_values().collect()
}
