//! Onboarding segmentation

use super::objectives::{INCREASE_USER_ADOPTION, SHARPEN_MARKETING_MESSAGING};
use crate::register_template;
use crate::types::{Question, QuestionType, SurveyPreset, Template, TemplateCategory};

pub const NAME: &str = "Onboarding Segmentation";

pub fn template() -> Template {
    let preset = SurveyPreset::new("Onboarding Segmentation")
        .with_question(
            Question::new("onboarding-role", QuestionType::MultipleChoiceSingle, "What is your role?")
                .with_subheader("Please select one of the following options:")
                .with_choice("founder", "Founder")
                .with_choice("executive", "Executive")
                .with_choice("product-manager", "Product Manager")
                .with_choice("engineer", "Engineer"),
        )
        .with_question(
            Question::new(
                "onboarding-source",
                QuestionType::MultipleChoiceSingle,
                "How did you hear about {{productName}} first?",
            )
            .with_choice("recommendation", "Recommendation")
            .with_choice("social", "Social Media")
            .with_choice("ads", "Ads")
            .with_choice("search", "Google Search"),
        );

    Template::new(
        NAME,
        "Learn more about who signed up to your product and why.",
        TemplateCategory::Growth,
        preset,
    )
    .with_objective(INCREASE_USER_ADOPTION)
    .with_objective(SHARPEN_MARKETING_MESSAGING)
}

register_template!(template, NAME, 20);
