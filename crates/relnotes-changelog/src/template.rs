//! Release notes templates
//!
//! Templates are Markdown with `{{name}}` placeholders, for example:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use relnotes_changelog::template::process_template;
//!
//! let mut vars = BTreeMap::new();
//! vars.insert("tag", "v1.2.0".to_string());
//!
//! let result = process_template("Welcome to {{tag}}!", &vars);
//! assert_eq!(result, "Welcome to v1.2.0!");
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, info};

use relnotes_core::config::{DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_FILE};
use relnotes_core::error::{Result, TemplateError};

/// Load the template at `path`.
///
/// When the file does not exist and `path` is the default template name the
/// built-in template is used instead.
pub fn resolve_template(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            info!(path = %path.display(), "loaded template");
            Ok(content)
        }
        Err(e)
            if e.kind() == std::io::ErrorKind::NotFound
                && path == Path::new(DEFAULT_TEMPLATE_FILE) =>
        {
            debug!("using built-in template");
            Ok(DEFAULT_TEMPLATE.to_string())
        }
        Err(e) => Err(TemplateError::Read {
            path: path.to_path_buf(),
            source: e,
        }
        .into()),
    }
}

/// A `{{name}}` placeholder
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("Invalid regex"));

/// Substitute `{{key}}` placeholders in one pass.
///
/// Substituted values are not scanned again. Unknown placeholders are left
/// as is.
pub fn process_template(template: &str, vars: &BTreeMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
