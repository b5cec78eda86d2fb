//! Feature chaser

use serde_json::json;

use super::objectives::INCREASE_USER_ADOPTION;
use crate::register_template;
use crate::types::{Question, QuestionType, SurveyPreset, Template, TemplateCategory};

pub const NAME: &str = "Feature Chaser";

pub fn template() -> Template {
    let preset = SurveyPreset::new("Feature Chaser")
        .with_question(
            Question::new(
                "feature-importance",
                QuestionType::Rating,
                "How important is this feature for you?",
            )
            .with_setting("scale", json!("number"))
            .with_setting("range", json!(5))
            .with_setting("lowerLabel", json!("Not important"))
            .with_setting("upperLabel", json!("Very important")),
        )
        .with_question(
            Question::new(
                "feature-problem",
                QuestionType::OpenText,
                "Which problem does this feature solve for you in {{productName}}?",
            )
            .optional(),
        );

    Template::new(
        NAME,
        "Follow up with users who just used a specific feature.",
        TemplateCategory::ProductExperience,
        preset,
    )
    .with_objective(INCREASE_USER_ADOPTION)
}

register_template!(template, NAME, 60);
