//! State transitions - FSM transition logic
//!
//! Implements the state machine that handles event-driven state transitions.

use thiserror::Error;

use super::events::CreationEvent;
use super::states::CreationState;

/// Default number of transitions kept in the history.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Error type for invalid state transitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Invalid transition from {from:?} with event {event}")]
    InvalidTransition { from: CreationState, event: String },

    #[error("State machine is in terminal state: {0:?}")]
    TerminalState(CreationState),
}

/// Represents a state transition result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTransition {
    /// The state before the transition.
    pub from: CreationState,
    /// The state after the transition.
    pub to: CreationState,
    /// The event that triggered the transition.
    pub event: CreationEvent,
    /// Whether the state actually changed.
    pub changed: bool,
}

/// State machine for managing template selection and submission.
#[derive(Debug, Clone)]
pub struct StateMachine {
    /// Current state.
    current_state: CreationState,
    /// Transition history (limited).
    history: Vec<StateTransition>,
    /// Max history entries to keep.
    max_history: usize,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Create a new state machine in Idle state.
    pub fn new() -> Self {
        Self::with_state(CreationState::Idle)
    }

    /// Create a state machine with a specific initial state.
    pub fn with_state(state: CreationState) -> Self {
        Self {
            current_state: state,
            history: Vec::new(),
            max_history: DEFAULT_MAX_HISTORY,
        }
    }

    /// Limit the number of transitions kept in the history.
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Get the current state.
    pub fn state(&self) -> &CreationState {
        &self.current_state
    }

    /// Get the transition history.
    pub fn history(&self) -> &[StateTransition] {
        &self.history
    }

    /// Handle an event and transition to a new state.
    ///
    /// Events with no transition from the current state are rejected and
    /// leave the state untouched.
    pub fn handle_event(&mut self, event: CreationEvent) -> Result<StateTransition, TransitionError> {
        let old_state = self.current_state.clone();
        let new_state = self.compute_next_state(&old_state, &event)?;
        let changed = old_state != new_state;

        tracing::debug!(
            from = ?old_state,
            to = ?new_state,
            event = event.name(),
            "survey creation transition"
        );

        self.current_state = new_state.clone();

        let transition = StateTransition {
            from: old_state,
            to: new_state,
            event,
            changed,
        };

        // Add to history
        self.history.push(transition.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        Ok(transition)
    }

    /// Compute the next state given current state and event.
    fn compute_next_state(
        &self,
        state: &CreationState,
        event: &CreationEvent,
    ) -> Result<CreationState, TransitionError> {
        use CreationEvent::*;
        use CreationState::*;

        let next = match (state, event) {
            (Succeeded { .. }, _) => return Err(TransitionError::TerminalState(state.clone())),

            // ========== Selection ==========
            (Idle | Selected { .. }, TemplatePicked { template_name }) => Selected {
                template_name: template_name.clone(),
            },

            // ========== Submission ==========
            (Selected { template_name }, SubmitRequested) => Submitting {
                template_name: template_name.clone(),
            },
            (Submitting { .. }, SubmissionSucceeded { survey_id }) => Succeeded {
                survey_id: survey_id.clone(),
            },

            // ========== Error Recovery ==========
            (Submitting { template_name }, SubmissionFailed { .. }) => Selected {
                template_name: template_name.clone(),
            },

            _ => {
                return Err(TransitionError::InvalidTransition {
                    from: state.clone(),
                    event: event.name().to_string(),
                })
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without executing it.
    pub fn can_transition(&self, event: &CreationEvent) -> bool {
        self.compute_next_state(&self.current_state, event).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picked(name: &str) -> CreationEvent {
        CreationEvent::TemplatePicked {
            template_name: name.to_string(),
        }
    }

    #[test]
    fn test_basic_flow() {
        let mut sm = StateMachine::new();
        assert_eq!(sm.state(), &CreationState::Idle);

        let t1 = sm.handle_event(picked("NPS")).unwrap();
        assert!(t1.changed);
        assert_eq!(sm.state().template_name(), Some("NPS"));

        let t2 = sm.handle_event(CreationEvent::SubmitRequested).unwrap();
        assert!(t2.changed);
        assert!(sm.state().is_submitting());

        sm.handle_event(CreationEvent::SubmissionSucceeded {
            survey_id: "s1".to_string(),
        })
        .unwrap();
        assert!(sm.state().is_terminal());
    }

    #[test]
    fn test_reselect_replaces_template() {
        let mut sm = StateMachine::new();
        sm.handle_event(picked("NPS")).unwrap();
        sm.handle_event(picked("Churn Survey")).unwrap();
        assert_eq!(sm.state().template_name(), Some("Churn Survey"));
    }

    #[test]
    fn test_confirm_requires_selection() {
        let mut sm = StateMachine::new();
        let err = sm.handle_event(CreationEvent::SubmitRequested).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
        assert_eq!(sm.state(), &CreationState::Idle);
        assert!(sm.history().is_empty());
    }

    #[test]
    fn test_no_second_submit_or_pick_while_submitting() {
        let mut sm = StateMachine::new();
        sm.handle_event(picked("NPS")).unwrap();
        sm.handle_event(CreationEvent::SubmitRequested).unwrap();

        assert!(!sm.can_transition(&CreationEvent::SubmitRequested));
        assert!(!sm.can_transition(&picked("Churn Survey")));
        assert!(sm.handle_event(CreationEvent::SubmitRequested).is_err());
        assert!(sm.state().is_submitting());
    }

    #[test]
    fn test_failure_returns_to_selected() {
        let mut sm = StateMachine::with_state(CreationState::Submitting {
            template_name: "NPS".to_string(),
        });
        let t = sm
            .handle_event(CreationEvent::SubmissionFailed {
                error: "boom".to_string(),
            })
            .unwrap();
        assert_eq!(
            t.to,
            CreationState::Selected {
                template_name: "NPS".to_string()
            }
        );
        assert!(sm.can_transition(&CreationEvent::SubmitRequested));
    }

    #[test]
    fn test_terminal_state_rejects_events() {
        let mut sm = StateMachine::with_state(CreationState::Succeeded {
            survey_id: "s1".to_string(),
        });
        let err = sm.handle_event(picked("NPS")).unwrap_err();
        assert!(matches!(err, TransitionError::TerminalState(_)));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut sm = StateMachine::new().with_max_history(2);
        sm.handle_event(picked("A")).unwrap();
        sm.handle_event(picked("B")).unwrap();
        sm.handle_event(picked("C")).unwrap();

        assert_eq!(sm.history().len(), 2);
        assert_eq!(sm.history()[1].event, picked("C"));
    }
}
