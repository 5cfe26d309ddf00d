//! Infrastructure adapters for ngfeat.
//!
//! This crate implements the ports defined in `ngfeat-core::application::ports`.
//! It contains all I/O and the template bodies that ship with the tool.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::BuiltinRenderer;
pub use template_loader::TemplateOverrideLoader;
