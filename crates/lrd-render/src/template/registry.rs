//! Partial registry for inline, file-based and built-in partials.
//!
//! # Partial Resolution
//!
//! Partials are resolved by name using these rules:
//!
//! 1. Inline partials (added via [`PartialRegistry::add_inline`]) have highest priority
//! 2. File partials come next; names must be unique across directories
//! 3. Built-in framework partials are the lowest-priority fallback
//!
//! # File Naming
//!
//! A partial file's resolution name is its path relative to the partial
//! directory, without extension and without the leading underscore of the
//! file name. `shared/_block.html.jinja` and `shared/block.html` both resolve
//! as `shared/block`.
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.html.jinja` |
//! | 2 | `.html.j2` |
//! | 3 | `.jinja` |
//! | 4 | `.j2` |
//! | 5 (lowest) | `.html` |
//!
//! If the same name appears twice in one directory, the higher-priority
//! extension wins. If it appears in two different directories, registration
//! fails with [`RegistryError::Collision`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recognized partial file extensions in priority order.
pub const PARTIAL_EXTENSIONS: &[&str] = &[".html.jinja", ".html.j2", ".jinja", ".j2", ".html"];

/// A partial file discovered during directory walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialFile {
    /// Resolution name (e.g. `"shared/block"`).
    pub name: String,
    /// Absolute path to the partial file.
    pub path: PathBuf,
    /// The partial directory this file belongs to.
    pub source_dir: PathBuf,
    /// Index into [`PARTIAL_EXTENSIONS`].
    pub extension_priority: usize,
}

/// Error type for partial registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Two partial directories contain files that resolve to the same name.
    #[error(
        "partial collision detected for \"{name}\":\n  - {} (from {})\n  - {} (from {})",
        existing_path.display(),
        existing_dir.display(),
        conflicting_path.display(),
        conflicting_dir.display()
    )]
    Collision {
        name: String,
        existing_path: PathBuf,
        existing_dir: PathBuf,
        conflicting_path: PathBuf,
        conflicting_dir: PathBuf,
    },

    /// The partial directory does not exist or is not a directory.
    #[error("partial directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read a partial file or walk a directory.
    #[error("failed to read partial \"{}\": {message}", path.display())]
    ReadError { path: PathBuf, message: String },
}

/// Where a registered partial came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartialSource {
    Framework,
    File {
        path: PathBuf,
        source_dir: PathBuf,
        extension_priority: usize,
    },
    Inline,
}

impl PartialSource {
    fn rank(&self) -> u8 {
        match self {
            PartialSource::Framework => 0,
            PartialSource::File { .. } => 1,
            PartialSource::Inline => 2,
        }
    }
}

/// Splits a relative path into a resolution name and extension priority.
///
/// Returns `None` for files without a recognized extension.
pub fn resolution_name(relative: &Path) -> Option<(String, usize)> {
    let relative = relative.to_string_lossy().replace('\\', "/");
    let (priority, stem) = PARTIAL_EXTENSIONS
        .iter()
        .enumerate()
        .find_map(|(i, ext)| relative.strip_suffix(ext).map(|stem| (i, stem)))?;

    let (dir, file) = match stem.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, stem),
    };
    let file = file.strip_prefix('_').unwrap_or(file);
    if file.is_empty() {
        return None;
    }
    let name = match dir {
        Some(dir) => format!("{}/{}", dir, file),
        None => file.to_string(),
    };
    Some((name, priority))
}

fn file_source(file: &PartialFile) -> PartialSource {
    PartialSource::File {
        path: file.path.clone(),
        source_dir: file.source_dir.clone(),
        extension_priority: file.extension_priority,
    }
}

/// Walks a partial directory and returns every recognized partial file.
pub fn walk_partial_dir(root: &Path) -> Result<Vec<PartialFile>, RegistryError> {
    if !root.is_dir() {
        return Err(RegistryError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| RegistryError::ReadError {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if let Some((name, extension_priority)) = resolution_name(relative) {
            files.push(PartialFile {
                name,
                path: entry.path().to_path_buf(),
                source_dir: root.to_path_buf(),
                extension_priority,
            });
        }
    }
    Ok(files)
}

/// Tracks which source currently owns each partial name.
#[derive(Debug, Default, Clone)]
pub struct PartialRegistry {
    sources: HashMap<String, PartialSource>,
}

impl PartialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a built-in partial. Returns whether it owns the name.
    pub fn add_framework(&mut self, name: &str) -> bool {
        self.offer(name, PartialSource::Framework)
    }

    /// Records an inline partial. Inline partials always win.
    pub fn add_inline(&mut self, name: &str) -> bool {
        self.offer(name, PartialSource::Inline)
    }

    /// Records a partial file. Returns whether it owns the name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Collision`] when another directory already
    /// provides a file for the same name.
    pub fn add_file(&mut self, file: &PartialFile) -> Result<bool, RegistryError> {
        self.check_collision(file)?;
        Ok(self.offer(&file.name, file_source(file)))
    }

    /// Whether [`add_file`](Self::add_file) would give `file` the name,
    /// without recording anything.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Collision`] under the same rule as `add_file`.
    pub fn accepts_file(&self, file: &PartialFile) -> Result<bool, RegistryError> {
        self.check_collision(file)?;
        Ok(self.wins(&file.name, &file_source(file)))
    }

    fn check_collision(&self, file: &PartialFile) -> Result<(), RegistryError> {
        if let Some(PartialSource::File {
            path, source_dir, ..
        }) = self.sources.get(&file.name)
        {
            if *source_dir != file.source_dir {
                return Err(RegistryError::Collision {
                    name: file.name.clone(),
                    existing_path: path.clone(),
                    existing_dir: source_dir.clone(),
                    conflicting_path: file.path.clone(),
                    conflicting_dir: file.source_dir.clone(),
                });
            }
        }
        Ok(())
    }

    fn offer(&mut self, name: &str, source: PartialSource) -> bool {
        let wins = self.wins(name, &source);
        if wins {
            self.sources.insert(name.to_string(), source);
        }
        wins
    }

    fn wins(&self, name: &str, source: &PartialSource) -> bool {
        match self.sources.get(name) {
            None => true,
            Some(existing) => match source.rank().cmp(&existing.rank()) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => match (source, existing) {
                    (
                        PartialSource::File {
                            extension_priority: new,
                            ..
                        },
                        PartialSource::File {
                            extension_priority: old,
                            ..
                        },
                    ) => new < old,
                    _ => true,
                },
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&PartialSource> {
        self.sources.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(|s| s.as_str())
    }
}
