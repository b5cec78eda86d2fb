//! Survey instantiation from templates

use crate::config::{TemplateConfig, DEFAULT_WEB_AUTO_COMPLETE};
use crate::types::{DeliveryChannel, EnvironmentCapabilities, SurveyDraft, Template};

/// Turns templates into survey drafts for a given environment
#[derive(Debug, Clone)]
pub struct SurveyInstantiator {
    web_auto_complete: u8,
}

impl Default for SurveyInstantiator {
    fn default() -> Self {
        Self {
            web_auto_complete: DEFAULT_WEB_AUTO_COMPLETE,
        }
    }
}

impl SurveyInstantiator {
    /// Create an instantiator using the configured auto-complete percentage
    pub fn new(config: &TemplateConfig) -> Self {
        Self {
            web_auto_complete: config.web_auto_complete,
        }
    }

    /// Delivery channel the environment supports
    pub fn delivery_channel(&self, caps: &EnvironmentCapabilities) -> DeliveryChannel {
        if caps.widget_setup_completed {
            DeliveryChannel::Web
        } else {
            DeliveryChannel::Link
        }
    }

    /// Auto-complete threshold for a channel; link surveys never auto-complete
    pub fn auto_complete(&self, channel: DeliveryChannel) -> Option<u8> {
        match channel {
            DeliveryChannel::Web => Some(self.web_auto_complete),
            DeliveryChannel::Link => None,
        }
    }

    /// Build a draft from the template's preset with delivery defaults applied
    pub fn instantiate(&self, template: &Template, caps: &EnvironmentCapabilities) -> SurveyDraft {
        let delivery_channel = self.delivery_channel(caps);
        let auto_complete = self.auto_complete(delivery_channel);

        log::info!(
            "Instantiating template {} for environment {} as {} survey",
            template.name,
            caps.environment_id,
            delivery_channel
        );

        SurveyDraft {
            preset: template.preset.clone(),
            delivery_channel,
            auto_complete,
        }
    }
}

/// Instantiate with the default settings
pub fn instantiate(template: &Template, caps: &EnvironmentCapabilities) -> SurveyDraft {
    SurveyInstantiator::default().instantiate(template, caps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Question, QuestionType, SurveyPreset, TemplateCategory};

    fn template() -> Template {
        let mut preset = SurveyPreset::new("Feature Chaser").with_question(
            Question::new("q1", QuestionType::Rating, "How important is this feature?")
                .with_setting("range", serde_json::json!(5)),
        );
        preset.extra.insert("status".to_string(), serde_json::json!("inProgress"));
        Template::new(
            "Feature Chaser",
            "Follow up with users who just used a feature",
            TemplateCategory::ProductExperience,
            preset,
        )
    }

    #[test]
    fn test_widget_environment_gets_web_defaults() {
        let draft = instantiate(&template(), &EnvironmentCapabilities::new("env1", true));
        assert_eq!(draft.delivery_channel, DeliveryChannel::Web);
        assert_eq!(draft.auto_complete, Some(50));
    }

    #[test]
    fn test_link_environment_disables_auto_complete() {
        let draft = instantiate(&template(), &EnvironmentCapabilities::new("env1", false));
        assert_eq!(draft.delivery_channel, DeliveryChannel::Link);
        assert_eq!(draft.auto_complete, None);
    }

    #[test]
    fn test_preset_copied_verbatim() {
        let source = template();
        let draft = instantiate(&source, &EnvironmentCapabilities::new("env1", true));
        assert_eq!(draft.preset, source.preset);
        assert_eq!(draft.preset.extra.get("status"), Some(&serde_json::json!("inProgress")));
    }

    #[test]
    fn test_configured_auto_complete() {
        let config = TemplateConfig {
            web_auto_complete: 80,
            ..TemplateConfig::default()
        };
        let draft = SurveyInstantiator::new(&config)
            .instantiate(&template(), &EnvironmentCapabilities::new("env1", true));
        assert_eq!(draft.auto_complete, Some(80));
    }
}
