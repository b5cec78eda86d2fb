//! Built-in survey templates

pub mod churn_survey;
pub mod custom_survey;
pub mod feature_chaser;
pub mod interview_prompt;
pub mod nps;
pub mod onboarding_segmentation;
pub mod pricing_research;
pub mod product_market_fit;

pub use custom_survey::custom_survey;

/// Objective tags used by the built-in templates
pub mod objectives {
    pub const INCREASE_USER_ADOPTION: &str = "increase_user_adoption";
    pub const INCREASE_CONVERSION: &str = "increase_conversion";
    pub const SUPPORT_SALES: &str = "support_sales";
    pub const SHARPEN_MARKETING_MESSAGING: &str = "sharpen_marketing_messaging";
    pub const IMPROVE_USER_RETENTION: &str = "improve_user_retention";
}
