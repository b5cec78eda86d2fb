//! Net promoter score

use serde_json::json;

use super::objectives::{IMPROVE_USER_RETENTION, SUPPORT_SALES};
use crate::register_template;
use crate::types::{
    Question, QuestionType, SurveyPreset, Template, TemplateCategory, END_DESTINATION,
};

pub const NAME: &str = "Net Promoter Score (NPS)";

pub fn template() -> Template {
    let preset = SurveyPreset::new("{{productName}} NPS")
        .with_question(
            Question::new(
                "nps-score",
                QuestionType::Nps,
                "How likely are you to recommend {{productName}} to a friend or colleague?",
            )
            .with_setting("lowerLabel", json!("Not at all likely"))
            .with_setting("upperLabel", json!("Extremely likely"))
            .with_logic("lessEqual", Some(json!(6)), "nps-detractor"),
        )
        .with_question(
            Question::new("nps-reason", QuestionType::OpenText, "What made you give that score?")
                .optional()
                .with_logic("submitted", None, END_DESTINATION),
        )
        .with_question(
            Question::new(
                "nps-detractor",
                QuestionType::OpenText,
                "What is the one thing we could do to improve {{productName}}?",
            )
            .optional(),
        );

    Template::new(
        NAME,
        "Measure Net Promoter Score of your customers.",
        TemplateCategory::CustomerSuccess,
        preset,
    )
    .with_objective(IMPROVE_USER_RETENTION)
    .with_objective(SUPPORT_SALES)
}

register_template!(template, NAME, 40);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_detractors_reach_improvement_question() {
        let template = template();
        template.validate().unwrap();
        let questions = &template.preset.questions;

        let score = &questions[0];
        assert_eq!(score.logic[0].destination, "nps-detractor");

        let reason = &questions[1];
        assert_eq!(reason.id, "nps-reason");
        assert_eq!(reason.logic.len(), 1);
        assert_eq!(reason.logic[0].condition, "submitted");
        assert_eq!(reason.logic[0].destination, END_DESTINATION);

        assert_eq!(questions[2].id, "nps-detractor");
    }
}
