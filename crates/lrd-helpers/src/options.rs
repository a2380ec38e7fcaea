//! Options for a labeled-input row.
//!
//! Layout options (label, required, comment, ...) are typed fields, so they
//! can never leak into the HTML attributes of the input. Everything that
//! should reach the input goes in [`LabeledInputOptions::attributes`].

use lrd_render::{Attributes, FieldKind, Markup, Result};

/// What fills the input slot of a row.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Build a control of this kind.
    Field(FieldKind),
    /// Use this pre-rendered markup verbatim.
    Override(Markup),
}

impl Default for InputSource {
    fn default() -> Self {
        InputSource::Field(FieldKind::default())
    }
}

/// Options for one call to [`labeled_input`](crate::labeled_input).
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledInputOptions {
    /// Emit label text. `false` keeps an empty label associated with the field.
    pub label: bool,
    /// Label text instead of the humanized field name.
    pub text: Option<String>,
    /// Marks the container and the built input as required.
    pub required: bool,
    /// Extra class appended to the container.
    pub container_class: Option<String>,
    /// Trailing comment text.
    pub comment: Option<String>,
    /// Built field kind, or pre-rendered markup used verbatim.
    pub input: InputSource,
    /// Visible text of a submit control.
    pub submit_text: Option<String>,
    /// Forwarded to the field constructor.
    pub attributes: Attributes,
}

impl Default for LabeledInputOptions {
    fn default() -> Self {
        Self {
            label: true,
            text: None,
            required: false,
            container_class: None,
            comment: None,
            input: InputSource::default(),
            submit_text: None,
            attributes: Attributes::new(),
        }
    }
}

impl LabeledInputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.input = InputSource::Field(kind);
        self
    }

    /// Sets the field kind from its type name.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidFieldType`](lrd_render::RenderError::InvalidFieldType)
    /// for an unrecognized name.
    pub fn field_type(self, name: &str) -> Result<Self> {
        Ok(self.kind(name.parse()?))
    }

    /// Uses pre-rendered markup as the input.
    pub fn input(mut self, markup: Markup) -> Self {
        self.input = InputSource::Override(markup);
        self
    }

    pub fn submit_text(mut self, text: impl Into<String>) -> Self {
        self.submit_text = Some(text.into());
        self
    }

    /// Adds an attribute forwarded to the field constructor.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}
