//! All helpers behind one handle.
//!
//! [`ViewHelpers`] pairs a render context with a configuration so template
//! code can call helpers without threading both through every call.

use lrd_render::{BoundTarget, Markup, RenderContext, Result};

use crate::config::HelperConfig;
use crate::debug::{debug_block, debug_link};
use crate::form_builder::FormBuilder;
use crate::labeled_input::{labeled_input, labeled_input_with, unlabeled_input, unlabeled_submit};
use crate::options::LabeledInputOptions;
use crate::partial::{block_to_partial, page_block, PartialOptions};
use crate::view::{bool_checked, headline, set_headline};

pub struct ViewHelpers<'a> {
    ctx: &'a mut dyn RenderContext,
    config: &'a HelperConfig,
}

impl<'a> ViewHelpers<'a> {
    pub fn new(ctx: &'a mut dyn RenderContext, config: &'a HelperConfig) -> Self {
        Self { ctx, config }
    }

    pub fn config(&self) -> &HelperConfig {
        self.config
    }

    pub fn context(&mut self) -> &mut dyn RenderContext {
        &mut *self.ctx
    }

    /// A form builder for `target`, borrowing this handle's context.
    pub fn form_for(&mut self, target: BoundTarget) -> FormBuilder<'_> {
        FormBuilder::new(&mut *self.ctx, self.config, target)
    }

    pub fn labeled_input(
        &mut self,
        target: Option<&BoundTarget>,
        field: &str,
        options: LabeledInputOptions,
    ) -> Result<Markup> {
        labeled_input(self.ctx, self.config, target, field, options)
    }

    pub fn labeled_input_with<F>(
        &mut self,
        target: Option<&BoundTarget>,
        field: &str,
        options: LabeledInputOptions,
        block: F,
    ) -> Result<Markup>
    where
        F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
    {
        labeled_input_with(self.ctx, self.config, target, field, options, block)
    }

    pub fn unlabeled_input(
        &mut self,
        target: Option<&BoundTarget>,
        field: &str,
        options: LabeledInputOptions,
    ) -> Result<Markup> {
        unlabeled_input(self.ctx, self.config, target, field, options)
    }

    pub fn unlabeled_submit(
        &mut self,
        text: Option<&str>,
        options: LabeledInputOptions,
    ) -> Result<Markup> {
        unlabeled_submit(self.ctx, self.config, text, options)
    }

    pub fn block_to_partial<F>(
        &mut self,
        partial: &str,
        options: PartialOptions,
        block: F,
    ) -> Result<Markup>
    where
        F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
    {
        block_to_partial(self.ctx, self.config, partial, options, block)
    }

    pub fn page_block<F>(
        &mut self,
        title: &str,
        options: PartialOptions,
        block: F,
    ) -> Result<Markup>
    where
        F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
    {
        page_block(self.ctx, self.config, title, options, block)
    }

    pub fn set_headline(&mut self, text: &str) {
        set_headline(self.ctx, self.config, text)
    }

    pub fn headline(&self) -> Option<&Markup> {
        headline(&*self.ctx, self.config)
    }

    pub fn bool_checked(&self, flag: bool) -> Markup {
        bool_checked(self.config, flag)
    }

    pub fn debug_block<F>(&mut self, name: &str, block: F) -> Result<Markup>
    where
        F: FnOnce(&mut dyn RenderContext) -> Result<Markup>,
    {
        debug_block(self.ctx, self.config, name, block)
    }

    pub fn debug_link(&self, name: &str) -> Markup {
        debug_link(name)
    }
}
