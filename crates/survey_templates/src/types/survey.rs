//! Survey drafts produced from templates

use serde::{Deserialize, Serialize};
use std::fmt;

use super::preset::SurveyPreset;

/// How a survey reaches respondents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryChannel {
    /// Embedded in the product through the widget
    Web,
    /// Standalone shareable link
    Link,
}

impl DeliveryChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved survey definition ready for persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyDraft {
    #[serde(flatten)]
    pub preset: SurveyPreset,

    #[serde(rename = "type")]
    pub delivery_channel: DeliveryChannel,

    /// Response percentage after which the survey closes, `None` when disabled
    pub auto_complete: Option<u8>,
}
