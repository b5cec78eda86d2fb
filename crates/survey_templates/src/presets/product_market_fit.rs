//! Product-market fit (Superhuman method)

use serde_json::json;

use super::objectives::{INCREASE_USER_ADOPTION, SHARPEN_MARKETING_MESSAGING};
use crate::register_template;
use crate::types::{Question, QuestionType, SurveyPreset, Template, TemplateCategory};

pub const NAME: &str = "Product Market Fit (Superhuman)";

pub fn template() -> Template {
    let preset = SurveyPreset::new("{{productName}} Product Market Fit")
        .with_question(
            Question::new(
                "pmf-disappointed",
                QuestionType::MultipleChoiceSingle,
                "How disappointed would you be if you could no longer use {{productName}}?",
            )
            .with_subheader("Please select one of the following options:")
            .with_choice("very", "Very disappointed")
            .with_choice("somewhat", "Somewhat disappointed")
            .with_choice("not", "Not disappointed"),
        )
        .with_question(
            Question::new(
                "pmf-benefit",
                QuestionType::OpenText,
                "What is the main benefit you receive from {{productName}}?",
            )
            .with_setting("inputType", json!("text")),
        )
        .with_question(
            Question::new(
                "pmf-improve",
                QuestionType::OpenText,
                "How can we improve {{productName}} for you?",
            )
            .with_subheader("Please be as specific as possible.")
            .optional()
            .with_setting("inputType", json!("text")),
        );

    Template::new(
        NAME,
        "Measure PMF by assessing how disappointed users would be if your product disappeared.",
        TemplateCategory::ProductExperience,
        preset,
    )
    .with_objective(INCREASE_USER_ADOPTION)
    .with_objective(SHARPEN_MARKETING_MESSAGING)
}

register_template!(template, NAME, 10);
