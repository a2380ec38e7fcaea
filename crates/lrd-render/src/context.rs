//! Render-scoped state injected into every helper call.
//!
//! Helpers never reach for ambient template state. Everything they need from
//! the host is behind [`RenderContext`]:
//!
//! 1. Scoped capture: run a block and get its output as a value
//! 2. Output buffer: append markup to the active render
//! 3. Content slots: named values a template writes and a layout reads
//! 4. Partial rendering: render a named partial with locals
//!
//! [`ViewContext`] is the standard implementation. Create one per request;
//! it owns its buffer and slots, so concurrent requests sharing the same
//! [`Partials`] never see each other's state.
//!
//! # Example
//!
//! ```rust
//! use lrd_render::context::{capture, RenderContext, ViewContext};
//! use lrd_render::{Markup, Partials};
//!
//! let partials = Partials::new();
//! let mut ctx = ViewContext::new(&partials);
//!
//! let body = capture(&mut ctx, |ctx| {
//!     ctx.append(&Markup::raw("<p>inside</p>"));
//!     Ok(Markup::new())
//! })
//! .unwrap();
//!
//! assert_eq!(body.as_str(), "<p>inside</p>");
//! assert!(ctx.output().is_empty());
//! ```

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::markup::Markup;
use crate::template::Partials;

/// A block of template logic, run by [`RenderContext::capture`].
pub type Block<'b> = dyn FnMut(&mut dyn RenderContext) -> Result<Markup> + 'b;

/// Host services available to helpers during one render.
pub trait RenderContext {
    /// Runs `block` against a fresh output buffer and returns what it produced.
    ///
    /// If the block appended to the buffer, the buffered markup is the result;
    /// otherwise the block's return value is. The enclosing buffer is restored
    /// even when the block fails.
    fn capture(&mut self, block: &mut Block<'_>) -> Result<Markup>;

    /// Appends markup to the active output buffer.
    fn append(&mut self, markup: &Markup);

    /// Writes a named content slot. The last write wins.
    fn set_content(&mut self, slot: &str, content: Markup);

    /// Reads a named content slot.
    fn content(&self, slot: &str) -> Option<&Markup>;

    /// Renders a named partial with `locals`.
    fn render_partial(&self, name: &str, locals: &Locals) -> Result<Markup>;
}

/// Captures a one-shot closure through [`RenderContext::capture`].
pub fn capture<F>(ctx: &mut dyn RenderContext, block: F) -> Result<Markup>
where
    F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
{
    let mut block = Some(block);
    ctx.capture(&mut |ctx| match block.take() {
        Some(f) => f(ctx),
        None => Ok(Markup::new()),
    })
}

/// A value handed to a partial.
#[derive(Debug, Clone, PartialEq)]
pub enum Local {
    /// Plain text, escaped when the partial prints it.
    Text(String),
    /// Trusted markup, printed verbatim.
    Markup(Markup),
    /// Structured data for loops and conditionals.
    Data(Value),
}

impl From<&str> for Local {
    fn from(text: &str) -> Self {
        Local::Text(text.to_string())
    }
}

impl From<String> for Local {
    fn from(text: String) -> Self {
        Local::Text(text)
    }
}

impl From<Markup> for Local {
    fn from(markup: Markup) -> Self {
        Local::Markup(markup)
    }
}

impl From<Value> for Local {
    fn from(value: Value) -> Self {
        Local::Data(value)
    }
}

/// Named values passed to a partial.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Locals {
    entries: BTreeMap<String, Local>,
}

impl Locals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a local, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Local>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Local>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Adds a serializable value as structured data.
    pub fn insert_data<T: Serialize>(&mut self, name: impl Into<String>, value: &T) -> Result<()> {
        self.entries
            .insert(name.into(), Local::Data(serde_json::to_value(value)?));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Local> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Local> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Local)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Per-request [`RenderContext`] backed by a shared [`Partials`] registry.
#[derive(Debug)]
pub struct ViewContext<'a> {
    partials: &'a Partials,
    output: Markup,
    slots: HashMap<String, Markup>,
}

impl<'a> ViewContext<'a> {
    pub fn new(partials: &'a Partials) -> Self {
        Self {
            partials,
            output: Markup::new(),
            slots: HashMap::new(),
        }
    }

    /// Markup appended so far.
    pub fn output(&self) -> &Markup {
        &self.output
    }

    /// Takes the output buffer, leaving it empty.
    pub fn take_output(&mut self) -> Markup {
        std::mem::take(&mut self.output)
    }

    pub fn into_output(self) -> Markup {
        self.output
    }

    /// Every content slot as markup locals, for rendering a layout.
    pub fn slot_locals(&self) -> Locals {
        let mut locals = Locals::new();
        for (name, content) in &self.slots {
            locals.insert(name.clone(), content.clone());
        }
        locals
    }

    /// Renders `layout` around `body`, exposing every content slot.
    pub fn render_layout(&self, layout: &str, body: Markup) -> Result<Markup> {
        let locals = self.slot_locals().with("body", body);
        self.partials.render(layout, &locals)
    }
}

impl RenderContext for ViewContext<'_> {
    fn capture(&mut self, block: &mut Block<'_>) -> Result<Markup> {
        let saved = std::mem::take(&mut self.output);
        let result = block(self);
        let buffered = std::mem::replace(&mut self.output, saved);
        let returned = result?;
        tracing::trace!(buffered = buffered.len(), returned = returned.len(), "captured block");
        Ok(if buffered.is_empty() { returned } else { buffered })
    }

    fn append(&mut self, markup: &Markup) {
        self.output.push(markup);
    }

    fn set_content(&mut self, slot: &str, content: Markup) {
        tracing::trace!(slot, "content slot written");
        self.slots.insert(slot.to_string(), content);
    }

    fn content(&self, slot: &str) -> Option<&Markup> {
        self.slots.get(slot)
    }

    fn render_partial(&self, name: &str, locals: &Locals) -> Result<Markup> {
        self.partials.render(name, locals)
    }
}
