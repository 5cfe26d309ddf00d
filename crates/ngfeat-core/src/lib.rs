//! ngfeat Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Angular feature scaffolder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            ngfeat-cli (CLI)             │
//! │      prompts, flags, config, output     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │      (Filesystem, TemplateRenderer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ngfeat-adapters (Infrastructure)    │
//! │ (LocalFilesystem, BuiltinRenderer, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (NameForms, RoutesDocument, FeatureTree)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ngfeat_core::prelude::*;
//!
//! let service = ScaffoldService::new(renderer, filesystem);
//! let request = FeatureRequest::nested("orders", Some("list".into()));
//! let report = service.build_structure(&request, "src/app")?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        ChildLayout, FeatureName, FeaturePlan, FeatureRequest, FeatureTree, NameForms,
        RenderContext, RoutesDocument, TemplateKind,
    };
    pub use crate::error::{NgfeatError, NgfeatResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
