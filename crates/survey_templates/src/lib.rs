//! survey_templates - Survey template catalog matching and instantiation
//!
//! Provides the template catalog, category/keyword matching, product
//! placeholder substitution and survey draft instantiation.

pub mod config;
pub mod error;
pub mod instantiator;
pub mod matcher;
pub mod placeholders;
pub mod presets;
pub mod registry;
pub mod types;

pub use config::TemplateConfig;
pub use error::{TemplateError, TemplateResult};
pub use instantiator::{instantiate, SurveyInstantiator};
pub use matcher::{default_category_filter, match_templates, TemplateFilter};
pub use placeholders::{substitute, Placeholder};
pub use registry::{Catalog, CatalogDocument};
pub use types::{
    CategoryFilter, DeliveryChannel, EnvironmentCapabilities, Product, Profile, Question,
    QuestionType, SurveyDraft, SurveyPreset, Template, TemplateCategory,
};
