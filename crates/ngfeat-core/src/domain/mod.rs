//! Core domain layer for ngfeat.
//!
//! This module contains pure logic with no I/O. Filesystem access and
//! template bodies are reached through the ports defined in the application
//! layer.
//!
//! - `naming`: casing converters and [`NameForms`]
//! - `template`: [`TemplateKind`] and [`RenderContext`]
//! - `routes`: the [`RoutesDocument`] model and merge
//! - `layout`: [`ChildLayout`] and [`FeatureRequest`]
//! - `feature_tree`: the planned output, [`FeatureTree`] and [`FeaturePlan`]
pub mod error;
pub mod feature_tree;
pub mod layout;
pub mod naming;
pub mod routes;
pub mod template;

pub use error::{DomainError, ErrorCategory};
pub use feature_tree::{
    DirectoryToCreate, FeaturePlan, FeatureTree, FileToWrite, FsEntry, RoutesRegistration,
};
pub use layout::{ChildLayout, DATA_DIR, FEATURE_DIR, FeatureRequest, UI_DIR, join_under};
pub use naming::{
    FeatureName, NameForms, to_camel_case, to_kebab_case, to_pascal_case,
    to_screaming_snake_case,
};
pub use routes::RoutesDocument;
pub use template::{RenderContext, TemplateKind};
