//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which lets [`Partials`]
//! work with different template backends. The default implementation is
//! [`MiniJinjaEngine`].
//!
//! [`Partials`]: super::Partials

use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, Value};

use crate::context::{Local, Locals};
use crate::error::Result;
use crate::markup::Markup;

/// A template engine that renders partials with locals.
///
/// Engines always produce HTML: plain-text locals are escaped on output and
/// markup locals are emitted verbatim.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and stores a named template, replacing any previous one.
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, locals: &Locals) -> Result<Markup>;

    /// Compiles and renders a template string in one step.
    fn render_template(&self, source: &str, locals: &Locals) -> Result<Markup>;
}

/// MiniJinja-based template engine with HTML auto-escaping on for every
/// template regardless of its name.
///
/// # Example
///
/// ```rust
/// use lrd_render::template::{MiniJinjaEngine, TemplateEngine};
/// use lrd_render::{Locals, Markup};
///
/// let engine = MiniJinjaEngine::new();
/// let locals = Locals::new()
///     .with("name", "<World>")
///     .with("body", Markup::raw("<p>ok</p>"));
///
/// let output = engine.render_template("Hello, {{ name }}! {{ body }}", &locals).unwrap();
/// assert_eq!(output.as_str(), "Hello, &lt;World&gt;! <p>ok</p>");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_name| AutoEscape::Html);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment,
    /// for registering custom filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn to_value(local: &Local) -> Value {
    match local {
        Local::Text(text) => Value::from(text.as_str()),
        Local::Markup(markup) => Value::from_safe_string(markup.as_str().to_string()),
        Local::Data(data) => Value::from_serialize(data),
    }
}

fn to_context(locals: &Locals) -> Value {
    let map: BTreeMap<String, Value> = locals
        .iter()
        .map(|(name, local)| (name.to_string(), to_value(local)))
        .collect();
    Value::from_serialize(&map)
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }

    fn render_named(&self, name: &str, locals: &Locals) -> Result<Markup> {
        let tmpl = self.env.get_template(name)?;
        Ok(Markup::raw(tmpl.render(to_context(locals))?))
    }

    fn render_template(&self, source: &str, locals: &Locals) -> Result<Markup> {
        Ok(Markup::raw(self.env.render_str(source, to_context(locals))?))
    }
}
