//! Workflow error types

use survey_templates::TemplateError;
use thiserror::Error;

use crate::machine::TransitionError;

#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("No template selected")]
    NoActiveTemplate,

    #[error("A survey is already being created")]
    SubmissionInFlight,

    #[error("Survey creation already finished")]
    Finished,

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Error returned by the survey store, unchanged
    #[error(transparent)]
    Submission(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
