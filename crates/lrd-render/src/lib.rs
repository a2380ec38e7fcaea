//! # LRD Render - HTML Markup Host for View Helpers
//!
//! `lrd-render` provides the rendering primitives the LRD view helpers are
//! built on: safe markup, element construction, label and form field
//! constructors, partial rendering, and the render-scoped context that ties
//! them together.
//!
//! ## Core Concepts
//!
//! - [`Markup`]: An HTML fragment that is safe to emit; text enters it escaped
//! - [`Attributes`]: Ordered element attributes
//! - [`FieldKind`]: The closed set of form controls, dispatched through a table
//! - [`BoundTarget`]: A form object name plus its serialized values
//! - [`RenderContext`]: Capture, output buffer, content slots and partials
//! - [`ViewContext`]: The per-request `RenderContext`
//! - [`Partials`]: Compiled partials shared across requests
//!
//! ## Quick Start
//!
//! ```rust
//! use lrd_render::{content_tag, Attributes, BoundTarget, FieldKind, Markup};
//! use lrd_render::form::label;
//! use serde_json::json;
//!
//! let user = BoundTarget::from_value("user", json!({"login": "bob"}));
//! let row = label(user.bind("login"), None, Attributes::new())
//!     + FieldKind::Text.build(Some(user.bind("login")), Attributes::new());
//!
//! let html = content_tag("div", &row, &Attributes::new().with("class", "row"));
//! assert_eq!(
//!     html.as_str(),
//!     concat!(
//!         r#"<div class="row"><label for="user_login">Login</label>"#,
//!         r#"<input type="text" id="user_login" name="user[login]" value="bob" /></div>"#,
//!     )
//! );
//! ```
//!
//! ## Partials and Per-Request Context
//!
//! ```rust
//! use lrd_render::{Locals, Markup, Partials, RenderContext, ViewContext};
//!
//! let mut partials = Partials::new();
//! partials.add_partial("layout", "<h1>{{ headline }}</h1>{{ body }}").unwrap();
//!
//! let mut ctx = ViewContext::new(&partials);
//! ctx.set_content("headline", Markup::escape("Users & Groups"));
//!
//! let page = ctx.render_layout("layout", Markup::raw("<ul></ul>")).unwrap();
//! assert_eq!(page.as_str(), "<h1>Users &amp; Groups</h1><ul></ul>");
//! ```

pub mod context;
mod error;
pub mod form;
pub mod inflect;
mod markup;
pub mod tag;
pub mod template;

pub use error::{RenderError, Result};

pub use markup::{escape_html, Markup, NBSP};

pub use tag::{content_tag, image_tag, link_to, tag, Attributes};

pub use form::{BoundTarget, Binding, FieldKind, FieldPrimitive, DEFAULT_SUBMIT_TEXT};

pub use context::{capture, Block, Local, Locals, RenderContext, ViewContext};

pub use template::{MiniJinjaEngine, Partials, RegistryError, TemplateEngine};
