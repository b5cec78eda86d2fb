//! Template selection and survey submission
//!
//! `TemplateWorkflow` drives one survey creation: the user picks templates,
//! each pick is personalized for the product, and a confirm hands the
//! resulting draft to the [`SurveyStore`]. Only one submission can be in
//! flight at a time; a failed submission keeps the selection for a retry.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use survey_templates::{
    substitute, EnvironmentCapabilities, Product, SurveyInstantiator, Template, TemplateConfig,
};

use crate::collaborators::{CreatedSurvey, SurveyNavigator, SurveyStore};
use crate::error::{Result, WorkflowError};
use crate::machine::{
    CreationEvent, CreationState, StateMachine, StateTransition, DEFAULT_MAX_HISTORY,
};

/// Error recorded when a pending confirm is dropped before the store answers
pub const CANCELLED_ERROR: &str = "cancelled";

/// Workflow settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Transitions kept for inspection
    pub max_history: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

/// Snapshot of the selection owned by a workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// The personalized template, never a raw catalog entry
    pub active_template: Option<Template>,
    pub is_submitting: bool,
}

#[derive(Debug)]
struct WorkflowInner {
    machine: StateMachine,
    active_template: Option<Template>,
    last_error: Option<String>,
}

/// Coordinates template selection and survey submission for one environment
pub struct TemplateWorkflow {
    environment: EnvironmentCapabilities,
    product: Product,
    instantiator: SurveyInstantiator,
    store: Arc<dyn SurveyStore>,
    navigator: Arc<dyn SurveyNavigator>,
    inner: Mutex<WorkflowInner>,
}

impl TemplateWorkflow {
    pub fn new(
        environment: EnvironmentCapabilities,
        product: Product,
        store: Arc<dyn SurveyStore>,
        navigator: Arc<dyn SurveyNavigator>,
    ) -> Self {
        Self {
            environment,
            product,
            instantiator: SurveyInstantiator::default(),
            store,
            navigator,
            inner: Mutex::new(WorkflowInner {
                machine: StateMachine::new(),
                active_template: None,
                last_error: None,
            }),
        }
    }

    /// Apply template settings (auto-complete percentage)
    pub fn with_template_config(mut self, config: &TemplateConfig) -> Self {
        self.instantiator = SurveyInstantiator::new(config);
        self
    }

    pub fn with_config(self, config: &WorkflowConfig) -> Self {
        {
            let mut inner = self.lock();
            inner.machine = StateMachine::new().with_max_history(config.max_history);
        }
        self
    }

    fn lock(&self) -> MutexGuard<'_, WorkflowInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn environment(&self) -> &EnvironmentCapabilities {
        &self.environment
    }

    pub fn state(&self) -> CreationState {
        self.lock().machine.state().clone()
    }

    pub fn selection(&self) -> SelectionState {
        let inner = self.lock();
        SelectionState {
            active_template: inner.active_template.clone(),
            is_submitting: inner.machine.state().is_submitting(),
        }
    }

    pub fn active_template(&self) -> Option<Template> {
        self.lock().active_template.clone()
    }

    /// Check if the template with this name is the active one
    pub fn is_active(&self, name: &str) -> bool {
        self.lock()
            .active_template
            .as_ref()
            .is_some_and(|t| t.name == name)
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().machine.state().is_submitting()
    }

    /// Whether confirm would start a submission right now
    pub fn can_confirm(&self) -> bool {
        self.lock().machine.state().can_confirm()
    }

    /// Message of the most recent failed submission, cleared by the next attempt
    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    pub fn history(&self) -> Vec<StateTransition> {
        self.lock().machine.history().to_vec()
    }

    /// Pick a catalog template; returns the personalized copy now active
    pub fn select(&self, template: &Template) -> Result<Template> {
        template.validate()?;

        let mut inner = self.lock();
        let state = inner.machine.state();
        if !state.accepts_selection() {
            return Err(if state.is_terminal() {
                WorkflowError::Finished
            } else {
                WorkflowError::SubmissionInFlight
            });
        }

        let derived = substitute(template, &self.product);
        inner.machine.handle_event(CreationEvent::TemplatePicked {
            template_name: derived.name.clone(),
        })?;
        inner.active_template = Some(derived.clone());
        inner.last_error = None;

        tracing::info!(template = %derived.name, "template selected");
        Ok(derived)
    }

    /// Create a survey from the active template.
    ///
    /// Rejected while another submission is in flight. On success the
    /// navigator is told about the new survey; on failure the selection is
    /// kept and the store's error is returned unchanged. Dropping the
    /// returned future before the store answers counts as a failed
    /// submission with [`CANCELLED_ERROR`].
    pub async fn confirm(&self) -> Result<CreatedSurvey> {
        let draft = {
            let mut inner = self.lock();
            match inner.machine.state() {
                CreationState::Idle => return Err(WorkflowError::NoActiveTemplate),
                CreationState::Submitting { .. } => return Err(WorkflowError::SubmissionInFlight),
                CreationState::Succeeded { .. } => return Err(WorkflowError::Finished),
                CreationState::Selected { .. } => {}
            }
            let template = inner
                .active_template
                .clone()
                .ok_or(WorkflowError::NoActiveTemplate)?;

            inner.machine.handle_event(CreationEvent::SubmitRequested)?;
            inner.last_error = None;
            self.instantiator.instantiate(&template, &self.environment)
        };

        let mut pending = PendingSubmission::new(self);
        tracing::info!(
            environment = %self.environment.environment_id,
            survey = %draft.preset.name,
            "submitting survey draft"
        );
        let outcome = self
            .store
            .create_survey(&self.environment.environment_id, draft)
            .await;
        pending.disarm();

        match outcome {
            Ok(survey) => {
                self.lock()
                    .machine
                    .handle_event(CreationEvent::SubmissionSucceeded {
                        survey_id: survey.id.clone(),
                    })?;
                tracing::info!(survey_id = %survey.id, "survey created");
                self.navigator
                    .survey_created(&self.environment.environment_id, &survey.id);
                Ok(survey)
            }
            Err(err) => {
                self.record_failure(err.to_string())?;
                Err(WorkflowError::Submission(err))
            }
        }
    }

    /// Return a submitting workflow to its selection, keeping the message
    fn record_failure(&self, message: String) -> Result<()> {
        {
            let mut inner = self.lock();
            inner.machine.handle_event(CreationEvent::SubmissionFailed {
                error: message.clone(),
            })?;
            inner.last_error = Some(message.clone());
        }
        tracing::warn!(error = %message, "survey creation failed");
        Ok(())
    }
}

/// Held while the store call of a confirm is pending.
///
/// If the confirm future is dropped first, the submission is recorded as
/// failed so the workflow does not stay in `Submitting`.
struct PendingSubmission<'a> {
    workflow: &'a TemplateWorkflow,
    armed: bool,
}

impl<'a> PendingSubmission<'a> {
    fn new(workflow: &'a TemplateWorkflow) -> Self {
        Self {
            workflow,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingSubmission<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let failed = CreationEvent::SubmissionFailed {
            error: CANCELLED_ERROR.to_string(),
        };
        if !self.workflow.lock().machine.can_transition(&failed) {
            return;
        }
        if let Err(err) = self.workflow.record_failure(CANCELLED_ERROR.to_string()) {
            tracing::error!(error = %err, "could not record cancelled submission");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{MockSurveyNavigator, MockSurveyStore};
    use mockall::Sequence;
    use survey_templates::{DeliveryChannel, Question, QuestionType, SurveyPreset, TemplateCategory};

    fn template(name: &str) -> Template {
        Template::new(
            name,
            "Ask about {{productName}}",
            TemplateCategory::Exploration,
            SurveyPreset::new("{{productName}} check-in").with_question(Question::new(
                "q1",
                QuestionType::OpenText,
                "What do you think of {{productName}}?",
            )),
        )
    }

    fn workflow(store: MockSurveyStore, navigator: MockSurveyNavigator, widget: bool) -> TemplateWorkflow {
        TemplateWorkflow::new(
            EnvironmentCapabilities::new("env1", widget),
            Product::new("p1", "Acme"),
            Arc::new(store),
            Arc::new(navigator),
        )
    }

    #[test]
    fn test_select_stores_personalized_copy() {
        let wf = workflow(MockSurveyStore::new(), MockSurveyNavigator::new(), false);
        let source = template("Check-in");

        let derived = wf.select(&source).unwrap();

        assert_eq!(derived.preset.name, "Acme check-in");
        assert_eq!(source.preset.name, "{{productName}} check-in");
        assert_eq!(wf.active_template(), Some(derived));
        assert!(wf.is_active("Check-in"));
        assert!(wf.can_confirm());
    }

    #[test]
    fn test_select_rejects_malformed_template() {
        let wf = workflow(MockSurveyStore::new(), MockSurveyNavigator::new(), false);
        let mut broken = template("Broken");
        broken.preset.questions.clear();

        let err = wf.select(&broken).unwrap_err();
        assert!(matches!(err, WorkflowError::Template(_)));
        assert_eq!(wf.state(), CreationState::Idle);
    }

    #[tokio::test]
    async fn test_confirm_without_selection() {
        let mut store = MockSurveyStore::new();
        store.expect_create_survey().never();
        let wf = workflow(store, MockSurveyNavigator::new(), false);

        let err = wf.confirm().await.unwrap_err();
        assert!(matches!(err, WorkflowError::NoActiveTemplate));
    }

    #[tokio::test]
    async fn test_confirm_success_navigates_once() {
        let mut store = MockSurveyStore::new();
        store
            .expect_create_survey()
            .withf(|env, draft| {
                env.to_string() == "env1"
                    && draft.delivery_channel == DeliveryChannel::Web
                    && draft.auto_complete == Some(50)
                    && draft.preset.name == "Acme check-in"
            })
            .times(1)
            .returning(|_, _| {
                Ok(CreatedSurvey {
                    id: "survey-1".to_string(),
                })
            });

        let mut navigator = MockSurveyNavigator::new();
        navigator
            .expect_survey_created()
            .withf(|env, id| env.to_string() == "env1" && id.to_string() == "survey-1")
            .times(1)
            .return_const(());

        let wf = workflow(store, navigator, true);
        wf.select(&template("Check-in")).unwrap();

        let survey = wf.confirm().await.unwrap();
        assert_eq!(survey.id, "survey-1");
        assert_eq!(
            wf.state(),
            CreationState::Succeeded {
                survey_id: "survey-1".to_string()
            }
        );

        assert!(matches!(wf.confirm().await, Err(WorkflowError::Finished)));
        assert!(matches!(wf.select(&template("Other")), Err(WorkflowError::Finished)));
    }

    #[tokio::test]
    async fn test_failure_keeps_selection_for_retry() {
        let mut seq = Sequence::new();
        let mut store = MockSurveyStore::new();
        store
            .expect_create_survey()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(anyhow::anyhow!("database unavailable")));
        store
            .expect_create_survey()
            .withf(|_, draft| draft.preset.name == "Acme check-in")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(CreatedSurvey {
                    id: "survey-2".to_string(),
                })
            });

        let mut navigator = MockSurveyNavigator::new();
        navigator.expect_survey_created().times(1).return_const(());

        let wf = workflow(store, navigator, false);
        let derived = wf.select(&template("Check-in")).unwrap();

        let err = wf.confirm().await.unwrap_err();
        assert_eq!(err.to_string(), "database unavailable");
        assert_eq!(wf.last_error().as_deref(), Some("database unavailable"));
        assert_eq!(
            wf.selection(),
            SelectionState {
                active_template: Some(derived),
                is_submitting: false,
            }
        );

        let survey = wf.confirm().await.unwrap();
        assert_eq!(survey.id, "survey-2");
        assert!(wf.last_error().is_none());
    }

    #[test]
    fn test_history_limit_from_config() {
        let wf = workflow(MockSurveyStore::new(), MockSurveyNavigator::new(), false)
            .with_config(&WorkflowConfig { max_history: 1 });
        wf.select(&template("A")).unwrap();
        wf.select(&template("B")).unwrap();

        let history = wf.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].to.template_name(), Some("B"));
    }
}
