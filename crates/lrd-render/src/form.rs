//! Label and form field primitives.
//!
//! These build the individual controls a form row is made of. A control is
//! either bound to an attribute of a form object (through a [`Binding`]),
//! which gives it an `id`, a `name` and a pre-filled `value`, or unbound, in
//! which case only the caller's attributes are emitted.
//!
//! Field kinds form a closed set, [`FieldKind`]. Each kind resolves to its
//! constructor through a lookup table, see [`FieldKind::primitive`].
//!
//! ```rust
//! use lrd_render::{Attributes, BoundTarget, FieldKind};
//! use serde_json::json;
//!
//! let user = BoundTarget::from_value("user", json!({"login": "bob"}));
//! let input = FieldKind::Text.build(Some(user.bind("login")), Attributes::new());
//! assert_eq!(
//!     input.as_str(),
//!     r#"<input type="text" id="user_login" name="user[login]" value="bob" />"#
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{RenderError, Result};
use crate::inflect::{humanize, sanitize_id};
use crate::markup::Markup;
use crate::tag::{content_tag, tag, Attributes};

/// Text shown on a submit control when none is given.
pub const DEFAULT_SUBMIT_TEXT: &str = "Save changes";

/// The kinds of control a form row can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Hidden,
    File,
    TextArea,
    Search,
    Telephone,
    Url,
    Email,
    Number,
    Range,
    Submit,
}

/// A control constructor: binding plus forwarded attributes to markup.
pub type FieldPrimitive = fn(Option<Binding<'_>>, Attributes) -> Markup;

/// Constructors, indexed by `FieldKind as usize`.
const FIELD_PRIMITIVES: [FieldPrimitive; 12] = [
    text_field,
    password_field,
    hidden_field,
    file_field,
    text_area,
    search_field,
    telephone_field,
    url_field,
    email_field,
    number_field,
    range_field,
    submit_field,
];

/// Accepted type names, including aliases.
const FIELD_NAMES: &[(&str, FieldKind)] = &[
    ("", FieldKind::Text),
    ("text", FieldKind::Text),
    ("password", FieldKind::Password),
    ("hidden", FieldKind::Hidden),
    ("file", FieldKind::File),
    ("textarea", FieldKind::TextArea),
    ("text_area", FieldKind::TextArea),
    ("search", FieldKind::Search),
    ("telephone", FieldKind::Telephone),
    ("tel", FieldKind::Telephone),
    ("url", FieldKind::Url),
    ("email", FieldKind::Email),
    ("number", FieldKind::Number),
    ("range", FieldKind::Range),
    ("submit", FieldKind::Submit),
];

impl FieldKind {
    /// Every field kind, in table order.
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Text,
        FieldKind::Password,
        FieldKind::Hidden,
        FieldKind::File,
        FieldKind::TextArea,
        FieldKind::Search,
        FieldKind::Telephone,
        FieldKind::Url,
        FieldKind::Email,
        FieldKind::Number,
        FieldKind::Range,
        FieldKind::Submit,
    ];

    /// Canonical type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Hidden => "hidden",
            FieldKind::File => "file",
            FieldKind::TextArea => "textarea",
            FieldKind::Search => "search",
            FieldKind::Telephone => "telephone",
            FieldKind::Url => "url",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Range => "range",
            FieldKind::Submit => "submit",
        }
    }

    /// Whether a default `size` attribute applies to this kind.
    pub fn accepts_size(&self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::Password
                | FieldKind::Search
                | FieldKind::Telephone
                | FieldKind::Url
                | FieldKind::Email
        )
    }

    /// The constructor for this kind.
    pub fn primitive(self) -> FieldPrimitive {
        FIELD_PRIMITIVES[self as usize]
    }

    /// Builds the control for this kind.
    pub fn build(self, binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
        tracing::debug!(kind = self.as_str(), bound = binding.is_some(), "building field");
        (self.primitive())(binding, attrs)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        FIELD_NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| {
                tracing::warn!(value = s, "rejected unknown field type");
                RenderError::invalid_field_type(s)
            })
    }
}

/// A form object a row is bound to.
///
/// The object name prefixes element ids and parameter names; the optional
/// serialized object supplies pre-filled values.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundTarget {
    object_name: String,
    object: Option<Value>,
}

impl BoundTarget {
    /// A target with a name and no values.
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            object: None,
        }
    }

    /// A target whose values come from an already serialized object.
    pub fn from_value(object_name: impl Into<String>, object: Value) -> Self {
        Self {
            object_name: object_name.into(),
            object: Some(object),
        }
    }

    /// A target whose values come from serializing `object`.
    pub fn with_object<T: Serialize>(object_name: impl Into<String>, object: &T) -> Result<Self> {
        Ok(Self::from_value(object_name, serde_json::to_value(object)?))
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn object(&self) -> Option<&Value> {
        self.object.as_ref()
    }

    /// Binds one attribute of this target.
    pub fn bind<'a>(&'a self, field: &'a str) -> Binding<'a> {
        Binding {
            target: self,
            field,
        }
    }
}

/// One attribute of a bound target.
#[derive(Debug, Clone, Copy)]
pub struct Binding<'a> {
    pub target: &'a BoundTarget,
    pub field: &'a str,
}

impl Binding<'_> {
    /// Element id, e.g. `user_login`.
    pub fn id(&self) -> String {
        let field = sanitize_id(self.field.trim_end_matches('?'));
        let prefix = sanitize_id(&self.target.object_name);
        if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}_{}", prefix, field)
        }
    }

    /// Parameter name, e.g. `user[login]`.
    pub fn name(&self) -> String {
        if self.target.object_name.is_empty() {
            self.field.to_string()
        } else {
            format!("{}[{}]", self.target.object_name, self.field)
        }
    }

    /// Current value of the attribute, if the object carries one.
    pub fn value(&self) -> Option<String> {
        match self.target.object.as_ref()?.get(self.field)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Default label text for the attribute.
    pub fn default_label(&self) -> String {
        humanize(self.field)
    }
}

/// Builds a `<label>` associated with a bound attribute.
///
/// `text` of `None` uses the humanized attribute name.
pub fn label(binding: Binding<'_>, text: Option<Markup>, attrs: Attributes) -> Markup {
    let text = text.unwrap_or_else(|| Markup::escape(&binding.default_label()));
    let attrs = Attributes::new().with("for", binding.id()).merge(attrs);
    content_tag("label", &text, &attrs)
}

fn binding_attrs(binding: Option<Binding<'_>>, with_value: bool) -> Attributes {
    let mut attrs = Attributes::new();
    if let Some(binding) = binding {
        attrs.set("id", binding.id());
        attrs.set("name", binding.name());
        if with_value {
            if let Some(value) = binding.value() {
                attrs.set("value", value);
            }
        }
    }
    attrs
}

fn input(
    input_type: &str,
    binding: Option<Binding<'_>>,
    with_value: bool,
    attrs: Attributes,
) -> Markup {
    let base = Attributes::new()
        .with("type", input_type)
        .merge(binding_attrs(binding, with_value));
    tag("input", &base.merge(attrs))
}

pub fn text_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("text", binding, true, attrs)
}

/// Password fields never echo the stored value.
pub fn password_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("password", binding, false, attrs)
}

pub fn hidden_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("hidden", binding, true, attrs)
}

pub fn file_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("file", binding, false, attrs)
}

/// Builds a `<textarea>` whose body is the escaped current value.
pub fn text_area(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    let body = binding
        .and_then(|b| b.value())
        .map(|v| Markup::escape(&v))
        .unwrap_or_default();
    let attrs = binding_attrs(binding, false).merge(attrs);
    content_tag("textarea", &body, &attrs)
}

pub fn search_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("search", binding, true, attrs)
}

pub fn telephone_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("tel", binding, true, attrs)
}

pub fn url_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("url", binding, true, attrs)
}

pub fn email_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("email", binding, true, attrs)
}

pub fn number_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("number", binding, true, attrs)
}

pub fn range_field(binding: Option<Binding<'_>>, attrs: Attributes) -> Markup {
    input("range", binding, true, attrs)
}

/// Submit controls ignore the binding; the visible text is the `value`
/// attribute, defaulting to [`DEFAULT_SUBMIT_TEXT`].
fn submit_field(_binding: Option<Binding<'_>>, mut attrs: Attributes) -> Markup {
    let text = attrs
        .remove("value")
        .unwrap_or_else(|| DEFAULT_SUBMIT_TEXT.to_string());
    submit_tag(&text, attrs)
}

/// Builds `<input type="submit" name="commit" value="text" />`.
pub fn submit_tag(text: &str, attrs: Attributes) -> Markup {
    let base = Attributes::new()
        .with("type", "submit")
        .with("name", "commit")
        .with("value", text);
    tag("input", &base.merge(attrs))
}
