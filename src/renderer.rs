//! Template renderer for debber.
//! The `debian/` file templates are compiled into the binary and served to
//! MiniJinja through a loader, so they are read-only for the life of the
//! process and parsed on first use.
use crate::error::Result;
use minijinja::{Environment, UndefinedBehavior};

/// Embedded templates, keyed by the file name they produce.
const TEMPLATES: &[(&str, &str)] = &[
    ("control", include_str!("../templates/control.j2")),
    ("rules", include_str!("../templates/rules.j2")),
    ("changelog", include_str!("../templates/changelog.j2")),
    ("copyright", include_str!("../templates/copyright.j2")),
];

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a named template with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of an embedded template
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// Folds a multi-line value into a Debian field body: continuation lines
/// start with a space and empty lines become ` .`.
pub fn continuation(value: String) -> String {
    let mut lines = value.lines();
    let mut folded = lines.next().unwrap_or_default().to_string();
    for line in lines {
        folded.push_str("\n ");
        folded.push_str(if line.trim().is_empty() { "." } else { line });
    }
    folded
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer serving the embedded `debian/` templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("continuation", continuation);
        env.set_loader(|name| {
            Ok(TEMPLATES
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, source)| (*source).to_string()))
        });
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders an embedded template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if:
    ///   - No template with that name is embedded
    ///   - The template fails to parse
    ///   - Rendering hits an undefined value
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
