//! Form builder bound to one object.
//!
//! ```rust
//! use lrd_helpers::{FormBuilder, HelperConfig, LabeledInputOptions};
//! use lrd_render::{BoundTarget, Partials, ViewContext};
//! use serde_json::json;
//!
//! let partials = Partials::new();
//! let mut ctx = ViewContext::new(&partials);
//! let config = HelperConfig::default();
//! let user = BoundTarget::from_value("user", json!({"login": "bob"}));
//!
//! let mut form = FormBuilder::new(&mut ctx, &config, user);
//! let row = form.labeled_input("login", LabeledInputOptions::new()).unwrap();
//! assert!(row.as_str().contains(r#"name="user[login]""#));
//! ```

use lrd_render::{BoundTarget, Markup, RenderContext, Result};

use crate::config::HelperConfig;
use crate::labeled_input::{labeled_input, labeled_input_with, unlabeled_input, unlabeled_submit};
use crate::options::LabeledInputOptions;

/// Renders labeled-input rows for a single bound object.
pub struct FormBuilder<'a> {
    ctx: &'a mut dyn RenderContext,
    config: &'a HelperConfig,
    target: BoundTarget,
}

impl<'a> FormBuilder<'a> {
    pub fn new(
        ctx: &'a mut dyn RenderContext,
        config: &'a HelperConfig,
        target: BoundTarget,
    ) -> Self {
        Self {
            ctx,
            config,
            target,
        }
    }

    pub fn target(&self) -> &BoundTarget {
        &self.target
    }

    pub fn labeled_input(&mut self, field: &str, options: LabeledInputOptions) -> Result<Markup> {
        labeled_input(self.ctx, self.config, Some(&self.target), field, options)
    }

    /// A row whose input is the output of `block`.
    pub fn labeled_input_with<F>(
        &mut self,
        field: &str,
        options: LabeledInputOptions,
        block: F,
    ) -> Result<Markup>
    where
        F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
    {
        labeled_input_with(self.ctx, self.config, Some(&self.target), field, options, block)
    }

    pub fn unlabeled_input(&mut self, field: &str, options: LabeledInputOptions) -> Result<Markup> {
        unlabeled_input(self.ctx, self.config, Some(&self.target), field, options)
    }

    /// A submit row. Submit rows are never bound to the object.
    pub fn unlabeled_submit(
        &mut self,
        text: Option<&str>,
        options: LabeledInputOptions,
    ) -> Result<Markup> {
        unlabeled_submit(self.ctx, self.config, text, options)
    }
}
