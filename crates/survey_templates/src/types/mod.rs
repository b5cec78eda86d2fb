pub mod category;
pub mod context;
pub mod preset;
pub mod survey;
pub mod template;

pub use category::{CategoryFilter, TemplateCategory, ALL_CATEGORY_NAME, RECOMMENDED_CATEGORY_NAME};
pub use context::{EnvironmentCapabilities, Product, Profile, OTHER_OBJECTIVE};
pub use preset::{Choice, LogicRule, Question, QuestionType, SurveyPreset, ThankYouCard, END_DESTINATION};
pub use survey::{DeliveryChannel, SurveyDraft};
pub use template::Template;
