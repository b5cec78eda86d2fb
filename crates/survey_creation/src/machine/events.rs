//! Creation events - Defines events that trigger state transitions

use serde::{Deserialize, Serialize};

/// Defines the events that can trigger state transitions in the FSM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationEvent {
    // ========== User Events ==========
    /// User picked a template from the catalog.
    TemplatePicked { template_name: String },

    /// User confirmed the active template.
    SubmitRequested,

    // ========== Persistence Events ==========
    /// The persistence service stored the survey.
    SubmissionSucceeded { survey_id: String },

    /// The persistence service rejected the survey.
    SubmissionFailed { error: String },
}

impl CreationEvent {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TemplatePicked { .. } => "template_picked",
            Self::SubmitRequested => "submit_requested",
            Self::SubmissionSucceeded { .. } => "submission_succeeded",
            Self::SubmissionFailed { .. } => "submission_failed",
        }
    }
}
