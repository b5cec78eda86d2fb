//! survey_creation - Template selection and survey submission workflow
//!
//! This crate provides the state machine that guards survey creation from a
//! catalog template and the workflow driving the persistence and navigation
//! collaborators.

pub mod collaborators;
pub mod error;
pub mod machine;
pub mod workflow;

// Re-export commonly used types
pub use collaborators::{editor_route, CreatedSurvey, SurveyNavigator, SurveyStore};
pub use error::{Result, WorkflowError};
pub use machine::{CreationEvent, CreationState, StateMachine, StateTransition, TransitionError};
pub use workflow::{SelectionState, TemplateWorkflow, WorkflowConfig, CANCELLED_ERROR};
