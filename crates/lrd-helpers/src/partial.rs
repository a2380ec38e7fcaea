//! Wrapping captured blocks in partials.
//!
//! [`block_to_partial`] captures a block and hands it to a partial as
//! `body`, so a partial can act as a decorating wrapper. `id` and `class`
//! become `cssid` and `cssclass`, keeping them clear of the partial's own
//! variable names. [`page_block`] is the common case: a titled box rendered
//! through the configured block partial.

use lrd_render::context::capture;
use lrd_render::{Local, Locals, Markup, RenderContext, Result};

use crate::config::HelperConfig;

/// Locals and CSS hooks for [`block_to_partial`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialOptions {
    pub id: Option<String>,
    pub class: Option<String>,
    pub locals: Locals,
}

impl PartialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn local(mut self, name: impl Into<String>, value: impl Into<Local>) -> Self {
        self.locals.insert(name, value);
        self
    }

    /// The locals the partial receives, with `body` set to `body`.
    pub fn into_locals(self, body: Markup) -> Locals {
        let mut locals = self.locals;
        normalize(&mut locals, "cssid", self.id);
        normalize(&mut locals, "cssclass", self.class);
        locals.insert("body", body);
        locals
    }
}

fn normalize(locals: &mut Locals, key: &str, value: Option<String>) {
    match value {
        Some(value) => locals.insert(key, value),
        None if locals.contains(key) => {}
        None => locals.insert(key, ""),
    }
}

/// Captures `block` and renders `partial` around it.
pub fn block_to_partial<F>(
    ctx: &mut dyn RenderContext,
    config: &HelperConfig,
    partial: &str,
    options: PartialOptions,
    block: F,
) -> Result<Markup>
where
    F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
{
    let body = capture(ctx, block)?;
    let locals = options.into_locals(body);
    let out = ctx.render_partial(partial, &locals)?;
    Ok(config.write_mode.emit(ctx, out))
}

/// Renders `block` inside the configured page block partial under `title`.
pub fn page_block<F>(
    ctx: &mut dyn RenderContext,
    config: &HelperConfig,
    title: &str,
    options: PartialOptions,
    block: F,
) -> Result<Markup>
where
    F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
{
    let options = options.local("title", title);
    block_to_partial(ctx, config, &config.block_partial, options, block)
}
