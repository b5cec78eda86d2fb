//! Template definitions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::preset::{SurveyPreset, END_DESTINATION};
use super::TemplateCategory;
use crate::error::{TemplateError, TemplateResult};

/// A reusable survey blueprint in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique name of the template, used as its identity key
    pub name: String,

    /// Human-readable description shown next to the name
    pub description: String,

    /// Category for catalog filtering
    #[serde(default)]
    pub category: TemplateCategory,

    /// Profile objectives this template is recommended for
    #[serde(default)]
    pub objectives: Vec<String>,

    /// The survey skeleton this template produces
    pub preset: SurveyPreset,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: TemplateCategory,
        preset: SurveyPreset,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            objectives: Vec::new(),
            preset,
        }
    }

    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objectives.push(objective.into());
        self
    }

    /// Check if this template is recommended for an objective
    pub fn is_recommended_for(&self, objective: &str) -> bool {
        self.objectives.iter().any(|o| o == objective)
    }

    pub fn uses_branching_logic(&self) -> bool {
        self.preset.uses_branching_logic()
    }

    /// Check that the preset can be turned into a valid survey
    pub fn validate(&self) -> TemplateResult<()> {
        let malformed = |reason: String| TemplateError::TemplateMalformed {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(malformed("template name is empty".to_string()));
        }
        if self.preset.questions.is_empty() {
            return Err(malformed("preset has no questions".to_string()));
        }

        let mut ids = HashSet::new();
        for question in &self.preset.questions {
            if question.id.trim().is_empty() {
                return Err(malformed("question with empty id".to_string()));
            }
            if !ids.insert(question.id.as_str()) {
                return Err(malformed(format!("duplicate question id: {}", question.id)));
            }
        }

        for question in &self.preset.questions {
            for rule in &question.logic {
                if rule.destination != END_DESTINATION && !ids.contains(rule.destination.as_str()) {
                    return Err(malformed(format!(
                        "question {} jumps to unknown destination {}",
                        question.id, rule.destination
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Question, QuestionType};

    fn template_with(questions: Vec<Question>) -> Template {
        let mut preset = SurveyPreset::new("Test");
        preset.questions = questions;
        Template::new("Test", "A test template", TemplateCategory::Growth, preset)
    }

    #[test]
    fn test_validate_accepts_well_formed_template() {
        let template = template_with(vec![
            Question::new("q1", QuestionType::Nps, "Recommend us?").with_logic(
                "lessThan",
                Some(serde_json::json!(7)),
                "q2",
            ),
            Question::new("q2", QuestionType::OpenText, "What could we improve?"),
        ]);
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_preset() {
        let err = template_with(vec![]).validate().unwrap_err();
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let err = template_with(vec![
            Question::new("q1", QuestionType::OpenText, "One"),
            Question::new("q1", QuestionType::OpenText, "Two"),
        ])
        .validate()
        .unwrap_err();
        assert!(matches!(err, TemplateError::TemplateMalformed { .. }));
    }

    #[test]
    fn test_validate_rejects_dangling_logic() {
        let err = template_with(vec![Question::new("q1", QuestionType::Cta, "Try it")
            .with_logic("clicked", None, "missing")])
        .validate()
        .unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_recommended_for_objective() {
        let template = template_with(vec![Question::new("q1", QuestionType::OpenText, "Hi")])
            .with_objective("growth")
            .with_objective("retention");
        assert!(template.is_recommended_for("growth"));
        assert!(!template.is_recommended_for("support"));
    }
}
