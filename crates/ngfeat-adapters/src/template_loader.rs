//! Filesystem-based template override loader.
//!
//! Reads `<kind>.tpl` files from one directory. Each file replaces the
//! built-in body of that kind for the whole run.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── service.tpl
//! ├── component.tpl
//! └── component-template.tpl
//! ```
//!
//! File stems are [`TemplateKind`] names: `service`, `store`, `component`,
//! `component-template`, `component-style`, `routes`. Other files are skipped
//! with a warning; subdirectories are not searched.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use ngfeat_core::{
    domain::TemplateKind,
    error::{NgfeatError, NgfeatResult},
};

use crate::filesystem::map_io_error;

/// Extension of override files.
pub const TEMPLATE_EXTENSION: &str = "tpl";

/// Loads template overrides from a directory.
#[derive(Debug, Clone)]
pub struct TemplateOverrideLoader {
    dir: PathBuf,
}

impl TemplateOverrideLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read every override in the directory.
    ///
    /// # Errors
    ///
    /// - [`NgfeatError::Configuration`] when the directory does not exist
    /// - a filesystem error when a `.tpl` file cannot be read
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    pub fn load(&self) -> NgfeatResult<HashMap<TemplateKind, String>> {
        if !self.dir.is_dir() {
            return Err(NgfeatError::Configuration {
                message: format!(
                    "templates directory '{}' does not exist",
                    self.dir.display()
                ),
            });
        }

        let mut overrides = HashMap::new();

        for walk_entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = walk_entry.map_err(|e| NgfeatError::Configuration {
                message: format!("cannot read templates directory: {e}"),
            })?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                debug!(path = %path.display(), "not a template file, skipping");
                continue;
            }

            let Some(kind) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<TemplateKind>().ok())
            else {
                warn!(path = %path.display(), "unknown template kind, skipping");
                continue;
            };

            let body =
                fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read template"))?;
            debug!(%kind, path = %path.display(), "template override loaded");
            overrides.insert(kind, body);
        }

        info!(count = overrides.len(), "template overrides loaded");
        Ok(overrides)
    }
}
