//! Pre-compiled partial renderer.
//!
//! [`Partials`] owns a [`TemplateEngine`] and a [`PartialRegistry`]. It is
//! built once at startup, then shared (it is `Send + Sync`) by every request,
//! each of which renders through its own [`ViewContext`].
//!
//! # Partial Sources
//!
//! 1. Inline strings via [`add_partial`](Partials::add_partial) - highest priority
//! 2. Filesystem directories via [`add_partial_dir`](Partials::add_partial_dir)
//! 3. Built-in framework partials, registered by [`Partials::new`]
//!
//! # Example
//!
//! ```rust
//! use lrd_render::{Locals, Markup, Partials};
//!
//! let mut partials = Partials::new();
//! partials.add_partial("shared/note", "<p class=\"note\">{{ body }}</p>").unwrap();
//!
//! let out = partials
//!     .render("shared/note", &Locals::new().with("body", Markup::raw("<b>hi</b>")))
//!     .unwrap();
//! assert_eq!(out.as_str(), "<p class=\"note\"><b>hi</b></p>");
//! ```
//!
//! [`ViewContext`]: crate::context::ViewContext

use std::fmt;
use std::path::Path;

use super::engine::{MiniJinjaEngine, TemplateEngine};
use super::framework::FRAMEWORK_PARTIALS;
use super::registry::{walk_partial_dir, PartialRegistry, RegistryError};
use crate::context::Locals;
use crate::error::{RenderError, Result};
use crate::markup::Markup;

/// A registry of compiled partials.
pub struct Partials {
    engine: Box<dyn TemplateEngine>,
    registry: PartialRegistry,
}

impl Partials {
    /// Creates a MiniJinja-backed registry holding the framework partials.
    pub fn new() -> Self {
        Self::with_engine(Box::new(MiniJinjaEngine::new()))
    }

    /// Creates a registry on a custom engine, holding the framework partials.
    pub fn with_engine(engine: Box<dyn TemplateEngine>) -> Self {
        let mut partials = Self {
            engine,
            registry: PartialRegistry::new(),
        };
        for (name, source) in FRAMEWORK_PARTIALS {
            if partials.registry.add_framework(name) {
                if let Err(err) = partials.engine.add_template(name, source) {
                    tracing::error!(
                        partial = name,
                        error = %err,
                        "framework partial failed to compile"
                    );
                }
            }
        }
        partials
    }

    /// Registers a named inline partial, shadowing any file or built-in one.
    ///
    /// The partial is compiled immediately; syntax errors are returned.
    pub fn add_partial(&mut self, name: &str, source: &str) -> Result<()> {
        self.engine.add_template(name, source)?;
        self.registry.add_inline(name);
        tracing::debug!(partial = name, "registered inline partial");
        Ok(())
    }

    /// Loads every partial file under `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory doesn't exist, a file can't be read
    /// or compiled, or a partial name is already provided by another directory.
    pub fn add_partial_dir<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let files = walk_partial_dir(path)?;
        tracing::debug!(dir = %path.display(), count = files.len(), "loading partial directory");

        for file in files {
            if !self.registry.accepts_file(&file)? {
                continue;
            }
            let source =
                std::fs::read_to_string(&file.path).map_err(|e| RegistryError::ReadError {
                    path: file.path.clone(),
                    message: e.to_string(),
                })?;
            self.engine.add_template(&file.name, &source)?;
            self.registry.add_file(&file)?;
        }
        Ok(())
    }

    /// Renders a named partial.
    pub fn render(&self, name: &str, locals: &Locals) -> Result<Markup> {
        if !self.registry.contains(name) {
            return Err(RenderError::TemplateNotFound(name.to_string()));
        }
        tracing::debug!(partial = name, locals = locals.len(), "rendering partial");
        self.engine.render_named(name, locals)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Number of partial names available, built-ins included.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn registry(&self) -> &PartialRegistry {
        &self.registry
    }
}

impl Default for Partials {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Partials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partials")
            .field("names", &self.registry.names().collect::<Vec<_>>())
            .finish()
    }
}
