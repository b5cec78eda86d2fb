//! Template system configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{TemplateError, TemplateResult};
use crate::types::OTHER_OBJECTIVE;

/// Auto-complete percentage applied to surveys delivered through the widget
pub const DEFAULT_WEB_AUTO_COMPLETE: u8 = 50;

const MAX_AUTO_COMPLETE: u8 = 100;

/// Settings for matching and instantiation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Auto-complete percentage for `web` delivery, at most 100
    pub web_auto_complete: u8,

    /// Profile objective treated as "no objective"
    pub other_objective: String,

    /// Optional catalog document replacing the built-in templates
    pub catalog_path: Option<PathBuf>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            web_auto_complete: DEFAULT_WEB_AUTO_COMPLETE,
            other_objective: OTHER_OBJECTIVE.to_string(),
            catalog_path: None,
        }
    }
}

impl TemplateConfig {
    pub fn from_yaml(yaml: &str) -> TemplateResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TemplateResult<()> {
        if self.web_auto_complete > MAX_AUTO_COMPLETE {
            return Err(TemplateError::InvalidConfig(format!(
                "web_auto_complete must be between 0 and {}, got {}",
                MAX_AUTO_COMPLETE, self.web_auto_complete
            )));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded template config from {:?}", path.as_ref());
        Self::from_yaml(&content)
    }
}
