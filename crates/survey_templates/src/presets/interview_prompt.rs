//! Interview invitation

use crate::register_template;
use crate::types::{Question, QuestionType, SurveyPreset, Template, TemplateCategory};

pub const NAME: &str = "Interview Prompt";

pub fn template() -> Template {
    let preset = SurveyPreset::new("Interview Prompt").with_question(
        Question::new(
            "interview-invite",
            QuestionType::Cta,
            "Do you have 15 min to talk to us? 🙏",
        )
        .with_subheader("You're one of our power users of {{productName}}. We would love to interview you briefly!")
        .with_button_label("Book slot")
        .optional()
        .with_setting("buttonExternal", serde_json::json!(true))
        .with_setting("buttonUrl", serde_json::json!("https://cal.com/")),
    );

    Template::new(
        NAME,
        "Invite a specific subset of your users to schedule an interview with your product team.",
        TemplateCategory::Exploration,
        preset,
    )
}

register_template!(template, NAME, 70);
