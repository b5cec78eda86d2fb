//! External collaborators of the creation workflow

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use survey_templates::SurveyDraft;

/// A survey as returned by the persistence service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSurvey {
    pub id: String,
}

/// Stores survey drafts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyStore: Send + Sync {
    /// Persist `draft` in the given environment and return the stored survey
    async fn create_survey(
        &self,
        environment_id: &str,
        draft: SurveyDraft,
    ) -> anyhow::Result<CreatedSurvey>;
}

/// Routes the user once a survey exists
#[cfg_attr(test, mockall::automock)]
pub trait SurveyNavigator: Send + Sync {
    fn survey_created(&self, environment_id: &str, survey_id: &str);
}

/// Editor route of a created survey
pub fn editor_route(environment_id: &str, survey_id: &str) -> String {
    format!("/environments/{}/surveys/{}/edit", environment_id, survey_id)
}
