use crate::templates::{IDENT_PLACEHOLDER, NAME_PLACEHOLDER, Template};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, info};

static PLUGIN_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("valid plugin name regex"));

/// Extension of generated plugin files.
pub const PLUGIN_EXTENSION: &str = "ts";

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(
        "Invalid plugin name '{0}'. Use lowercase letters, digits and dashes, starting with a letter or digit"
    )]
    InvalidName(String),

    #[error("'{0}' already exists. Pass --force to overwrite it")]
    AlreadyExists(PathBuf),

    #[error("Failed to write '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Everything needed to write one plugin file
#[derive(Debug, Clone)]
pub struct ScaffoldRequest<'a> {
    pub plugin_name: &'a str,
    pub template: &'a Template,
    pub dir: &'a Path,
    pub force: bool,
}

pub fn validate_plugin_name(name: &str) -> Result<(), ScaffoldError> {
    if PLUGIN_NAME_RE.is_match(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// `my-plugin` -> `MyPlugin`
pub fn export_ident(plugin_name: &str) -> String {
    let ident: String = plugin_name
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    // TypeScript identifiers cannot start with a digit.
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Plugin{ident}")
    } else {
        ident
    }
}

/// Fill the template placeholders for `plugin_name`
pub fn render_template(template: &Template, plugin_name: &str) -> String {
    template
        .source
        .replace(IDENT_PLACEHOLDER, &export_ident(plugin_name))
        .replace(NAME_PLACEHOLDER, plugin_name)
}

pub fn plugin_path(dir: &Path, plugin_name: &str) -> PathBuf {
    dir.join(format!("{plugin_name}.{PLUGIN_EXTENSION}"))
}

/// Render the template and write it to `<dir>/<plugin_name>.ts`
///
/// The directory is created when missing. An existing file is only replaced
/// when `force` is set.
pub fn scaffold_plugin(request: &ScaffoldRequest<'_>) -> Result<PathBuf, ScaffoldError> {
    validate_plugin_name(request.plugin_name)?;

    let path = plugin_path(request.dir, request.plugin_name);
    if path.exists() && !request.force {
        return Err(ScaffoldError::AlreadyExists(path));
    }

    fs::create_dir_all(request.dir).map_err(|source| ScaffoldError::Io {
        path: request.dir.to_path_buf(),
        source,
    })?;

    let header = format!(
        "// Generated by opencode-kit new --template {}\n// Date: {}\n\n",
        request.template.name,
        chrono::Local::now().format("%Y-%m-%d")
    );
    let body = render_template(request.template, request.plugin_name);
    debug!(path = %path.display(), bytes = body.len(), "writing plugin");

    fs::write(&path, format!("{header}{body}")).map_err(|source| ScaffoldError::Io {
        path: path.clone(),
        source,
    })?;

    info!(
        plugin = request.plugin_name,
        template = request.template.name,
        "scaffolded plugin"
    );
    Ok(path)
}
