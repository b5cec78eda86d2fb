//! The blank starting point for surveys without a preset

use crate::types::{Question, QuestionType, SurveyPreset, Template, TemplateCategory};

pub const CUSTOM_SURVEY_NAME: &str = "Start from scratch";

/// Always offered alongside the catalog, regardless of filters
pub fn custom_survey() -> Template {
    Template::new(
        CUSTOM_SURVEY_NAME,
        "Create a survey without template.",
        TemplateCategory::Unclassified,
        SurveyPreset::new("New Survey").with_question(
            Question::new("custom-q1", QuestionType::OpenText, "What would you like to know?")
                .with_subheader("This is an example survey.")
                .with_placeholder("Type your answer here...")
                .with_setting("inputType", serde_json::json!("text")),
        ),
    )
}
