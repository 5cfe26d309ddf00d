// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Routes document
    // ========================================================================
    #[error("malformed routes document: {reason}")]
    MalformedRoutes { reason: String },

    // ========================================================================
    // Feature tree
    // ========================================================================
    #[error("Duplicate path in feature tree: {path}")]
    DuplicatePath { path: String },

    #[error("Feature tree is empty")]
    EmptyTree,

    // ========================================================================
    // Templates
    // ========================================================================
    #[error("Unknown template kind: {0}")]
    UnknownTemplateKind(String),

    #[error("Unknown child layout: {0}")]
    UnknownLayout(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedRoutes { reason } => vec![
                format!("The routes file could not be merged: {reason}"),
                "Make sure the file still declares its routes as `... = [ ... ];`".into(),
                "Or delete the file to have it generated again".into(),
            ],
            Self::DuplicatePath { path } => vec![
                format!("Two generated entries share the path '{path}'"),
                "Pick a child name that differs from the generated folder names".into(),
            ],
            Self::UnknownTemplateKind(kind) => vec![
                format!("'{kind}' is not a template kind"),
                "Known kinds: service, store, component, component-template, \
                 component-style, routes"
                    .into(),
            ],
            Self::UnknownLayout(layout) => vec![
                format!("'{layout}' is not a child layout"),
                "Use 'flat' (<parent>/<child>) or 'under-feature' (<parent>/feature/<child>)"
                    .into(),
            ],
            Self::EmptyTree => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedRoutes { .. } | Self::DuplicatePath { .. } => {
                ErrorCategory::Validation
            }
            Self::UnknownTemplateKind(_) => ErrorCategory::NotFound,
            Self::UnknownLayout(_) => ErrorCategory::Validation,
            Self::EmptyTree => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
