//! Caller-owned context passed into matching and instantiation

use serde::{Deserialize, Serialize};

/// Objective value meaning "no particular objective"
pub const OTHER_OBJECTIVE: &str = "other";

/// The product a template is being instantiated for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,

    /// Display name, substituted for `{{productName}}`
    #[serde(default)]
    pub name: String,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The user profile driving recommendations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub objective: Option<String>,
}

impl Profile {
    pub fn with_objective(objective: impl Into<String>) -> Self {
        Self {
            objective: Some(objective.into()),
        }
    }

    /// The objective to recommend against, if it is set and meaningful
    pub fn recommendation_objective(&self, other_sentinel: &str) -> Option<&str> {
        self.objective
            .as_deref()
            .filter(|o| !o.is_empty() && *o != other_sentinel)
    }
}

/// What the target environment can deliver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentCapabilities {
    pub environment_id: String,

    /// Whether the embedded widget has been set up for this environment
    #[serde(default)]
    pub widget_setup_completed: bool,
}

impl EnvironmentCapabilities {
    pub fn new(environment_id: impl Into<String>, widget_setup_completed: bool) -> Self {
        Self {
            environment_id: environment_id.into(),
            widget_setup_completed,
        }
    }
}
