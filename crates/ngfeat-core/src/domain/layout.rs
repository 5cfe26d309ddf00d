//! Where a feature's files go.

use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, naming::FeatureName};

/// Folder holding a unit's service and store.
pub const DATA_DIR: &str = "data";
/// Placeholder folder for presentational components.
pub const UI_DIR: &str = "ui";
/// Folder holding a unit's routed component.
pub const FEATURE_DIR: &str = "feature";

/// `base` joined with a user-supplied name or file name.
///
/// Root and drive-prefix components of `name` are dropped, so `/abs` under
/// `src/app` is `src/app/abs` rather than `/abs`.
pub fn join_under(base: &Path, name: impl AsRef<Path>) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in name.as_ref().components() {
        match component {
            Component::RootDir | Component::Prefix(_) => {}
            other => path.push(other),
        }
    }
    path
}

/// Where a nested child lives relative to its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChildLayout {
    /// `<parent>/<child>`
    #[default]
    Flat,
    /// `<parent>/feature/<child>`
    UnderFeature,
}

impl ChildLayout {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::UnderFeature => "under-feature",
        }
    }

    /// Child folder relative to the parent folder.
    pub fn child_dir(&self, child: &FeatureName) -> PathBuf {
        let base = match self {
            Self::Flat => Path::new(""),
            Self::UnderFeature => Path::new(FEATURE_DIR),
        };
        join_under(base, child.as_str())
    }

    /// Import specifier of the child's component, relative to the parent's
    /// routes file (which sits in the parent folder).
    pub fn component_import(&self, child: &FeatureName) -> String {
        let component = join_under(
            &self.child_dir(child).join(FEATURE_DIR),
            format!("{}.component", child.forms().kebab()),
        );
        let segments: Vec<_> = component
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        format!("./{}", segments.join("/"))
    }
}

impl fmt::Display for ChildLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChildLayout {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "under-feature" | "under_feature" | "feature" => Ok(Self::UnderFeature),
            other => Err(DomainError::UnknownLayout(other.to_owned())),
        }
    }
}

/// The answers that drive one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRequest {
    name: FeatureName,
    nested: bool,
    child: Option<FeatureName>,
}

impl FeatureRequest {
    /// A leaf feature: gets its own component.
    pub fn leaf(name: impl Into<FeatureName>) -> Self {
        Self {
            name: name.into(),
            nested: false,
            child: None,
        }
    }

    /// A nested feature, optionally adding one child. An empty child name
    /// counts as no child.
    pub fn nested(name: impl Into<FeatureName>, child: Option<FeatureName>) -> Self {
        Self {
            name: name.into(),
            nested: true,
            child: child.filter(|c| !c.is_empty()),
        }
    }

    pub fn name(&self) -> &FeatureName {
        &self.name
    }

    pub fn is_nested(&self) -> bool {
        self.nested
    }

    pub fn child(&self) -> Option<&FeatureName> {
        self.child.as_ref()
    }
}
