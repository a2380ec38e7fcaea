//! # LRD Helpers - View and Form Helpers
//!
//! Small helpers that generate the recurring markup of an application's
//! templates: labeled form rows, submit rows, boxed page blocks, a headline
//! slot, a boolean indicator and collapsible debug output.
//!
//! Helpers take their host services explicitly. Each one receives a
//! [`RenderContext`](lrd_render::RenderContext) for capture, content slots and
//! partial rendering, plus a [`HelperConfig`] for class names and asset paths.
//!
//! ## Labeled Inputs
//!
//! ```rust
//! use lrd_helpers::{labeled_input, HelperConfig, LabeledInputOptions};
//! use lrd_render::{BoundTarget, Partials, ViewContext};
//! use serde_json::json;
//!
//! let partials = Partials::new();
//! let mut ctx = ViewContext::new(&partials);
//! let config = HelperConfig::default();
//! let user = BoundTarget::from_value("user", json!({"login": "bob"}));
//!
//! let row = labeled_input(
//!     &mut ctx,
//!     &config,
//!     Some(&user),
//!     "login",
//!     LabeledInputOptions::new().required(true).comment("Required field"),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     row.as_str(),
//!     concat!(
//!         r#"<div class="labeled_input required">"#,
//!         r#"<label for="user_login">Login</label>"#,
//!         r#"<input type="text" id="user_login" name="user[login]" value="bob" class="required" />"#,
//!         r#"<span class="comment">Required field</span>"#,
//!         "</div>",
//!     )
//! );
//! ```
//!
//! ## Page Blocks
//!
//! ```rust
//! use lrd_helpers::{page_block, HelperConfig, PartialOptions};
//! use lrd_render::{Markup, Partials, RenderContext, ViewContext};
//!
//! let partials = Partials::new();
//! let mut ctx = ViewContext::new(&partials);
//!
//! let config = HelperConfig::default();
//! let html = page_block(&mut ctx, &config, "Users", PartialOptions::new(), |ctx| {
//!     ctx.append(&Markup::raw("<ul></ul>"));
//!     Ok(Markup::new())
//! })
//! .unwrap();
//!
//! assert!(html.as_str().contains(r#"<h2 class="page_block_title">Users</h2>"#));
//! ```

mod config;
mod debug;
mod form_builder;
mod helpers;
mod labeled_input;
mod options;
mod partial;
mod view;

pub use config::{HelperConfig, WriteMode};
pub use debug::{debug_block, debug_info_id, debug_link};
pub use form_builder::FormBuilder;
pub use helpers::ViewHelpers;
pub use labeled_input::{
    container_class, labeled_input, labeled_input_with, unlabeled_input, unlabeled_submit,
};
pub use options::{InputSource, LabeledInputOptions};
pub use partial::{block_to_partial, page_block, PartialOptions};
pub use view::{bool_checked, headline, set_headline};
