//! Safe markup strings and HTML escaping.
//!
//! [`Markup`] is a string that is already valid HTML. Plain text enters it only
//! through [`Markup::escape`]; trusted fragments (output of tag builders or
//! rendered partials) enter through [`Markup::raw`]. Concatenating two
//! `Markup` values never re-escapes either side.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Serialize, Serializer};

/// A non-breaking space entity, used for placeholder labels.
pub const NBSP: &str = "&nbsp;";

/// Escapes the five HTML-significant characters in `text`.
///
/// ```rust
/// use lrd_render::escape_html;
///
/// assert_eq!(escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An HTML fragment that is safe to emit as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps trusted HTML without escaping it.
    pub fn raw(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Escapes plain text into a fragment.
    pub fn escape(text: &str) -> Self {
        Self(escape_html(text))
    }

    /// The `&nbsp;` placeholder fragment.
    pub fn nbsp() -> Self {
        Self::raw(NBSP)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Appends another fragment.
    pub fn push(&mut self, other: &Markup) {
        self.0.push_str(&other.0);
    }

    /// Appends plain text, escaping it.
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape_html(text));
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Add for Markup {
    type Output = Markup;

    fn add(mut self, rhs: Markup) -> Markup {
        self.0.push_str(&rhs.0);
        self
    }
}

impl AddAssign<&Markup> for Markup {
    fn add_assign(&mut self, rhs: &Markup) {
        self.push(rhs);
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for part in iter {
            out.push(&part);
        }
        out
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.0
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Markup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
