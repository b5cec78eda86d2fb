//! Van Westendorp pricing research

use super::objectives::INCREASE_CONVERSION;
use crate::register_template;
use crate::types::{Question, QuestionType, SurveyPreset, Template, TemplateCategory};

pub const NAME: &str = "Pricing Research";

pub fn template() -> Template {
    let preset = SurveyPreset::new("Pricing Research")
        .with_question(
            Question::new(
                "pricing-cheap",
                QuestionType::OpenText,
                "At what price would you consider {{productName}} to be a bargain?",
            )
            .with_placeholder("$"),
        )
        .with_question(
            Question::new(
                "pricing-expensive",
                QuestionType::OpenText,
                "At what price would {{productName}} start to seem expensive?",
            )
            .with_placeholder("$"),
        )
        .with_question(
            Question::new(
                "pricing-too-expensive",
                QuestionType::OpenText,
                "At what price would {{productName}} be too expensive to consider?",
            )
            .with_placeholder("$"),
        );

    Template::new(
        NAME,
        "Gauge the price range your customers find acceptable.",
        TemplateCategory::IncreaseRevenue,
        preset,
    )
    .with_objective(INCREASE_CONVERSION)
}

register_template!(template, NAME, 50);
