//! Creation states - Defines all possible states of a template selection

use serde::{Deserialize, Serialize};

/// Defines the possible states of a survey creation from a template.
///
/// A failed submission has no state of its own: it returns the machine to
/// `Selected` with the same template so the user can retry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreationState {
    /// No template picked yet.
    #[default]
    Idle,

    /// A personalized template is active and can be confirmed.
    Selected {
        /// Name of the active template.
        template_name: String,
    },

    /// The draft is with the persistence service.
    Submitting {
        /// Name of the template being submitted.
        template_name: String,
    },

    /// The survey was stored (terminal state).
    Succeeded {
        /// Identifier of the stored survey.
        survey_id: String,
    },
}

impl CreationState {
    /// Check if this is a terminal state (no more transitions expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    /// Check if a template may be picked in this state.
    pub fn accepts_selection(&self) -> bool {
        matches!(self, Self::Idle | Self::Selected { .. })
    }

    /// Check if the confirm action is available.
    pub fn can_confirm(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Name of the active template, if any.
    pub fn template_name(&self) -> Option<&str> {
        match self {
            Self::Selected { template_name } | Self::Submitting { template_name } => {
                Some(template_name)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(CreationState::default(), CreationState::Idle);
    }

    #[test]
    fn test_guards() {
        let selected = CreationState::Selected {
            template_name: "NPS".to_string(),
        };
        let submitting = CreationState::Submitting {
            template_name: "NPS".to_string(),
        };

        assert!(!CreationState::Idle.can_confirm());
        assert!(selected.can_confirm());
        assert!(!submitting.can_confirm());
        assert!(!submitting.accepts_selection());
        assert!(selected.accepts_selection());
        assert!(!CreationState::Succeeded {
            survey_id: "s1".to_string()
        }
        .accepts_selection());
        assert_eq!(submitting.template_name(), Some("NPS"));
    }
}
