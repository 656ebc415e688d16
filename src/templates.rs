//! Built-in plugin templates
//!
//! The registry is compiled into the binary and never changes at runtime. Lookups
//! are by exact name; an unknown name is reported as absent, never replaced with
//! a fallback template.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Placeholder for the kebab-case plugin name
pub const NAME_PLACEHOLDER: &str = "{{plugin_name}}";
/// Placeholder for the PascalCase export identifier
pub const IDENT_PLACEHOLDER: &str = "{{PluginName}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template '{name}' not found. Built-ins: {}", .available.join(", "))]
    NotFound {
        name: String,
        available: Vec<&'static str>,
    },
}

static BUILTIN_TEMPLATE_NAMES: &[&str] =
    &["basic", "security", "notification", "custom-tool", "logging"];

static BUILTIN_TEMPLATES: &[Template] = &[
    Template {
        name: "basic",
        description: "Minimal plugin that logs every event type",
        source: include_str!("../templates/basic.ts"),
    },
    Template {
        name: "security",
        description: "Blocks tool calls that touch secret files",
        source: include_str!("../templates/security.ts"),
    },
    Template {
        name: "notification",
        description: "Desktop notification when a session goes idle",
        source: include_str!("../templates/notification.ts"),
    },
    Template {
        name: "custom-tool",
        description: "Registers a custom tool with a typed argument schema",
        source: include_str!("../templates/custom-tool.ts"),
    },
    Template {
        name: "logging",
        description: "Logs events selected by a pattern list",
        source: include_str!("../templates/logging.ts"),
    },
];

/// Template names in registry order
pub fn builtin_template_names() -> &'static [&'static str] {
    BUILTIN_TEMPLATE_NAMES
}

pub fn builtin_templates() -> &'static [Template] {
    BUILTIN_TEMPLATES
}

/// Look up a template by exact name
pub fn load_builtin_template(name: &str) -> Option<&'static Template> {
    let found = BUILTIN_TEMPLATES.iter().find(|t| t.name == name);
    debug!(template = name, found = found.is_some(), "template lookup");
    found
}

/// Like [`load_builtin_template`], but reports the available names on a miss
pub fn find_template(name: &str) -> Result<&'static Template, TemplateError> {
    load_builtin_template(name).ok_or_else(|| TemplateError::NotFound {
        name: name.to_string(),
        available: builtin_template_names().to_vec(),
    })
}
