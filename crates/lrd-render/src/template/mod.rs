//! Partial rendering.
//!
//! Partials are small named templates rendered with [`Locals`]. Text locals
//! are HTML-escaped on output; [`Markup`] locals (such as a captured block
//! passed as `body`) are emitted as-is.
//!
//! ## Key Types
//!
//! - [`Partials`]: compiled partial registry shared across requests
//! - [`TemplateEngine`]: backend abstraction, [`MiniJinjaEngine`] by default
//! - [`PartialRegistry`]: name resolution across inline, file and built-in sources
//!
//! [`Locals`]: crate::context::Locals
//! [`Markup`]: crate::markup::Markup

mod engine;
mod framework;
mod partials;
pub mod registry;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use framework::FRAMEWORK_PARTIALS;
pub use partials::Partials;
pub use registry::{
    resolution_name, walk_partial_dir, PartialFile, PartialRegistry, PartialSource,
    RegistryError, PARTIAL_EXTENSIONS,
};
