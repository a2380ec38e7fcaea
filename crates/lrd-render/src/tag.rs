//! Element construction.
//!
//! [`Attributes`] keeps insertion order so generated markup is deterministic;
//! overwriting an attribute keeps its original position. The builders here
//! ([`content_tag`], [`tag`], [`image_tag`], [`link_to`]) escape every
//! attribute value and trust only [`Markup`] content.

use crate::markup::{escape_html, Markup};

/// Ordered HTML attributes.
///
/// # Example
///
/// ```rust
/// use lrd_render::Attributes;
///
/// let mut attrs = Attributes::new().with("id", "login").with("class", "wide");
/// attrs.append_class("required");
/// assert_eq!(attrs.get("class"), Some("wide required"));
/// assert_eq!(attrs.to_html(), r#" id="login" class="wide required""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning `self` for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an attribute, replacing any previous value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Sets an attribute only when it is not already present.
    pub fn set_default(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if !self.contains(&name) {
            self.entries.push((name, value.into()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Adds a token to the `class` attribute, keeping existing tokens.
    pub fn append_class(&mut self, class: &str) {
        let merged = match self.get("class").map(str::trim) {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.to_string(),
        };
        self.set("class", merged);
    }

    /// Overlays `other` on top of `self`. Values from `other` win.
    pub fn merge(mut self, other: Attributes) -> Self {
        for (name, value) in other.entries {
            self.set(name, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Renders the attributes, each with a leading space.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// Builds `<name attrs>content</name>`.
pub fn content_tag(name: &str, content: &Markup, attrs: &Attributes) -> Markup {
    Markup::raw(format!(
        "<{name}{attrs}>{content}</{name}>",
        attrs = attrs.to_html()
    ))
}

/// Builds a void element, `<name attrs />`.
pub fn tag(name: &str, attrs: &Attributes) -> Markup {
    Markup::raw(format!("<{name}{} />", attrs.to_html()))
}

/// Builds an `<img>` element. `src` comes first, then `attrs`.
pub fn image_tag(src: &str, attrs: Attributes) -> Markup {
    tag("img", &Attributes::new().with("src", src).merge(attrs))
}

/// Builds an `<a>` element with escaped link text.
pub fn link_to(text: &str, href: &str, attrs: Attributes) -> Markup {
    content_tag(
        "a",
        &Markup::escape(text),
        &Attributes::new().with("href", href).merge(attrs),
    )
}
