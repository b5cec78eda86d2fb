//! Churn survey with follow-ups per cancellation reason

use serde_json::json;

use super::objectives::{IMPROVE_USER_RETENTION, INCREASE_CONVERSION};
use crate::register_template;
use crate::types::{Question, QuestionType, SurveyPreset, Template, TemplateCategory, END_DESTINATION};

pub const NAME: &str = "Churn Survey";

pub fn template() -> Template {
    let preset = SurveyPreset::new("Churn Survey")
        .with_question(
            Question::new(
                "churn-reason",
                QuestionType::MultipleChoiceSingle,
                "Why did you cancel your subscription?",
            )
            .with_subheader("We're sorry to see you leave. Help us do better:")
            .with_choice("difficult", "Difficult to use")
            .with_choice("expensive", "It's too expensive")
            .with_choice("missing", "I am missing features")
            .with_choice("support", "Poor customer service")
            .with_choice("done", "I just didn't need it anymore")
            .with_logic("equals", Some(json!("Difficult to use")), "churn-difficult")
            .with_logic("equals", Some(json!("It's too expensive")), "churn-expensive")
            .with_logic("equals", Some(json!("I just didn't need it anymore")), END_DESTINATION),
        )
        .with_question(
            Question::new(
                "churn-difficult",
                QuestionType::OpenText,
                "What would have made {{productName}} easier to use?",
            )
            .with_logic("submitted", None, END_DESTINATION),
        )
        .with_question(
            Question::new(
                "churn-expensive",
                QuestionType::Cta,
                "Get 50% off for the next 3 months!",
            )
            .with_button_label("Get 50% off")
            .optional()
            .with_logic("clicked", None, END_DESTINATION),
        );

    Template::new(
        NAME,
        "Find out why people cancel their subscriptions. These insights are pure gold!",
        TemplateCategory::IncreaseRevenue,
        preset,
    )
    .with_objective(IMPROVE_USER_RETENTION)
    .with_objective(INCREASE_CONVERSION)
}

register_template!(template, NAME, 30);
