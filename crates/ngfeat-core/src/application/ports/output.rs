//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ngfeat-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RenderContext, TemplateKind};
use crate::error::NgfeatResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ngfeat_adapters::filesystem::LocalFilesystem` (production)
/// - `ngfeat_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> NgfeatResult<()>;

    /// Write content to a file, replacing whatever was there.
    fn write_file(&self, path: &Path, content: &str) -> NgfeatResult<()>;

    /// Read a file. `Ok(None)` when nothing exists at `path`.
    fn read_file(&self, path: &Path) -> NgfeatResult<Option<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `ngfeat_adapters::renderer::BuiltinRenderer` (built-in bodies, optional
///   per-kind overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Produce the text of one file of `kind` for the name in `context`.
    fn render(&self, kind: TemplateKind, context: &RenderContext) -> NgfeatResult<String>;
}
