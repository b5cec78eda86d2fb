//! Survey preset definitions carried by templates

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Logic destination that ends the survey instead of jumping to a question
pub const END_DESTINATION: &str = "end";

/// Question kinds understood by the survey editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    OpenText,
    MultipleChoiceSingle,
    MultipleChoiceMulti,
    #[serde(rename = "nps")]
    Nps,
    #[serde(rename = "cta")]
    Cta,
    Rating,
    Consent,
}

/// A selectable answer of a multiple choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
}

/// A branching rule attached to a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicRule {
    /// Condition identifier, e.g. `submitted`, `equals`, `lessThan`
    pub condition: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Target question id, or [`END_DESTINATION`]
    pub destination: String,
}

/// A single question of a survey preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,

    #[serde(rename = "type")]
    pub question_type: QuestionType,

    pub headline: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheader: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_button_label: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub logic: Vec<LogicRule>,

    /// Type-specific settings (scales, ranges, labels) kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        question_type: QuestionType,
        headline: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question_type,
            headline: headline.into(),
            subheader: None,
            required: true,
            placeholder: None,
            button_label: None,
            back_button_label: None,
            choices: Vec::new(),
            logic: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_subheader(mut self, subheader: impl Into<String>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = Some(label.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Add a selectable answer
    pub fn with_choice(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.push(Choice {
            id: id.into(),
            label: label.into(),
        });
        self
    }

    pub fn with_logic(
        mut self,
        condition: impl Into<String>,
        value: Option<Value>,
        destination: impl Into<String>,
    ) -> Self {
        self.logic.push(LogicRule {
            condition: condition.into(),
            value,
            destination: destination.into(),
        });
        self
    }

    /// Attach a type-specific setting
    pub fn with_setting(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Closing card shown after the last question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThankYouCard {
    pub enabled: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheader: Option<String>,
}

impl Default for ThankYouCard {
    fn default() -> Self {
        Self {
            enabled: true,
            headline: Some("Thank you!".to_string()),
            subheader: Some("We appreciate your feedback.".to_string()),
        }
    }
}

/// The survey skeleton a template instantiates into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyPreset {
    pub name: String,

    pub questions: Vec<Question>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thank_you_card: Option<ThankYouCard>,

    /// Remaining survey settings copied verbatim into drafts
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SurveyPreset {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
            thank_you_card: Some(ThankYouCard::default()),
            extra: Map::new(),
        }
    }

    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Whether any question carries branching logic
    pub fn uses_branching_logic(&self) -> bool {
        self.questions.iter().any(|q| !q.logic.is_empty())
    }
}
