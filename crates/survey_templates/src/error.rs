//! Template system error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template {name} is malformed: {reason}")]
    TemplateMalformed { name: String, reason: String },

    #[error("Duplicate template name in catalog: {0}")]
    DuplicateTemplate(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid template config: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for TemplateError {
    fn from(err: serde_yaml::Error) -> Self {
        TemplateError::CatalogParse(err.to_string())
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(err: serde_json::Error) -> Self {
        TemplateError::CatalogParse(err.to_string())
    }
}

pub type TemplateResult<T> = std::result::Result<T, TemplateError>;
