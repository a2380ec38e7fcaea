//! Helper configuration.
//!
//! Class names, asset paths and partial names used by the helpers are not
//! hard-coded: they live in [`HelperConfig`], which can be built in code or
//! loaded from YAML. Every field has a default, so a YAML file only needs the
//! keys it changes:
//!
//! ```rust
//! use lrd_helpers::{HelperConfig, WriteMode};
//!
//! let config = HelperConfig::from_yaml(r#"
//! container_class: form_row
//! default_input_size: 30
//! write_mode: append_to_active_context
//! "#).unwrap();
//!
//! assert_eq!(config.container_class, "form_row");
//! assert_eq!(config.required_class, "required");
//! assert_eq!(config.default_input_size, Some(30));
//! assert_eq!(config.write_mode, WriteMode::AppendToActiveContext);
//! ```

use std::path::Path;

use lrd_render::{Markup, RenderContext, RenderError, Result};
use serde::{Deserialize, Serialize};

/// Where a helper's finished fragment goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Return the fragment to the caller.
    #[default]
    Return,
    /// Append the fragment to the context's output buffer and return empty
    /// markup. Kept for templates written against the older helpers.
    AppendToActiveContext,
}

impl WriteMode {
    /// Delivers `markup` according to the mode.
    pub fn emit(self, ctx: &mut dyn RenderContext, markup: Markup) -> Markup {
        match self {
            WriteMode::Return => markup,
            WriteMode::AppendToActiveContext => {
                ctx.append(&markup);
                Markup::new()
            }
        }
    }
}

/// Settings shared by all helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Base class of a labeled-input container.
    pub container_class: String,
    /// Class added to containers and inputs of required fields.
    pub required_class: String,
    /// Class of the trailing comment span.
    pub comment_class: String,
    /// Partial rendered by `page_block`.
    pub block_partial: String,
    /// Content slot `set_headline` writes.
    pub headline_slot: String,
    /// Prefix for relative image paths.
    pub image_root: String,
    /// Image shown by `bool_checked` for `true`.
    pub checked_icon: String,
    /// Image shown by `bool_checked` for `false`.
    pub unchecked_icon: String,
    /// Width and height of the `bool_checked` image, in pixels.
    pub icon_size: u32,
    /// `size` attribute added to text-like inputs that don't set one.
    pub default_input_size: Option<u32>,
    /// Submit button text when none is given.
    pub submit_text: String,
    pub write_mode: WriteMode,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            container_class: "labeled_input".to_string(),
            required_class: "required".to_string(),
            comment_class: "comment".to_string(),
            block_partial: "shared/block".to_string(),
            headline_slot: "headline".to_string(),
            image_root: "/images".to_string(),
            checked_icon: "check.png".to_string(),
            unchecked_icon: "blank.gif".to_string(),
            icon_size: 16,
            default_input_size: None,
            submit_text: lrd_render::DEFAULT_SUBMIT_TEXT.to_string(),
            write_mode: WriteMode::Return,
        }
    }
}

impl HelperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| RenderError::Config(e.to_string()))
    }

    /// Reads a YAML configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded helper config");
        Ok(config)
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn with_default_input_size(mut self, size: u32) -> Self {
        self.default_input_size = Some(size);
        self
    }

    /// Resolves an image asset against [`image_root`](Self::image_root).
    /// Absolute paths and URLs are kept as given.
    pub fn image_path(&self, asset: &str) -> String {
        if asset.starts_with('/') || asset.contains("://") {
            asset.to_string()
        } else {
            format!("{}/{}", self.image_root.trim_end_matches('/'), asset)
        }
    }
}
