//! Template kinds and the variable-substitution context.
//!
//! Templates are plain text with `{{VARIABLE}}` placeholders. The bodies
//! themselves live in `ngfeat-adapters`; the core only knows which kinds
//! exist, what file each one produces, and how placeholders are filled.
//!
//! ## Built-in Variables
//!
//! | Variable | Example (`orderList`) |
//! |----------|-----------------------|
//! | `FEATURE_NAME` | `orderList` |
//! | `FEATURE_NAME_CAMEL` | `orderList` |
//! | `FEATURE_NAME_PASCAL` | `OrderList` |
//! | `FEATURE_NAME_KEBAB` | `order-list` |
//! | `FEATURE_NAME_SCREAMING` | `ORDER_LIST` |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, naming::NameForms};

/// One kind of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Service,
    Store,
    Component,
    ComponentTemplate,
    ComponentStyle,
    Routes,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 6] = [
        Self::Service,
        Self::Store,
        Self::Component,
        Self::ComponentTemplate,
        Self::ComponentStyle,
        Self::Routes,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Store => "store",
            Self::Component => "component",
            Self::ComponentTemplate => "component-template",
            Self::ComponentStyle => "component-style",
            Self::Routes => "routes",
        }
    }

    const fn file_suffix(&self) -> &'static str {
        match self {
            Self::Service => "service.ts",
            Self::Store => "store.ts",
            Self::Component => "component.ts",
            Self::ComponentTemplate => "component.html",
            Self::ComponentStyle => "component.scss",
            Self::Routes => "routes.ts",
        }
    }

    /// File name this kind produces for `forms`, e.g. `order-list.service.ts`.
    pub fn file_name(&self, forms: &NameForms) -> String {
        format!("{}.{}", forms.kebab(), self.file_suffix())
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| DomainError::UnknownTemplateKind(s.to_owned()))
    }
}

/// Context for template rendering. Immutable after creation.
#[derive(Debug, Clone)]
pub struct RenderContext {
    feature_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(forms: &NameForms) -> Self {
        let mut vars = HashMap::new();
        vars.insert("FEATURE_NAME".to_string(), forms.raw().to_string());
        vars.insert("FEATURE_NAME_CAMEL".to_string(), forms.camel().to_string());
        vars.insert("FEATURE_NAME_PASCAL".to_string(), forms.pascal().to_string());
        vars.insert("FEATURE_NAME_KEBAB".to_string(), forms.kebab().to_string());
        vars.insert(
            "FEATURE_NAME_SCREAMING".to_string(),
            forms.screaming().to_string(),
        );

        Self {
            feature_name: forms.raw().to_string(),
            variables: vars,
        }
    }

    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders in one left-to-right pass.
    ///
    /// - `{{UNKNOWN}}` stays as literal text
    /// - substituted values are never scanned again, so a name that itself
    ///   contains `{{...}}` is copied verbatim
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            out.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];

            match after_open.find("}}") {
                Some(close) => {
                    let key = &after_open[..close];
                    match self.get(key) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after_open[close + 2..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }
}
