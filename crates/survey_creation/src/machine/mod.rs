//! State machine module
//!
//! Contains the FSM implementation for survey creation from a template.

mod events;
mod states;
mod transitions;

pub use events::CreationEvent;
pub use states::CreationState;
pub use transitions::{StateMachine, StateTransition, TransitionError, DEFAULT_MAX_HISTORY};
