//! Category definitions for templates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown for the unfiltered view
pub const ALL_CATEGORY_NAME: &str = "All";

/// Label shown for the objective-driven view
pub const RECOMMENDED_CATEGORY_NAME: &str = "For you";

/// A category for organizing templates in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TemplateCategory {
    #[serde(rename = "Product Experience")]
    ProductExperience,
    #[serde(rename = "Exploration")]
    Exploration,
    #[serde(rename = "Growth")]
    Growth,
    #[serde(rename = "Increase Revenue")]
    IncreaseRevenue,
    #[serde(rename = "Customer Success")]
    CustomerSuccess,
    /// Templates that don't belong to any of the named categories
    #[default]
    #[serde(other, rename = "Other")]
    Unclassified,
}

impl TemplateCategory {
    /// Named categories in display order
    pub const NAMED: [TemplateCategory; 5] = [
        TemplateCategory::ProductExperience,
        TemplateCategory::Exploration,
        TemplateCategory::Growth,
        TemplateCategory::IncreaseRevenue,
        TemplateCategory::CustomerSuccess,
    ];

    /// Display label of the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::ProductExperience => "Product Experience",
            Self::Exploration => "Exploration",
            Self::Growth => "Growth",
            Self::IncreaseRevenue => "Increase Revenue",
            Self::CustomerSuccess => "Customer Success",
            Self::Unclassified => "Other",
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The category selection applied when listing the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every template
    #[default]
    All,
    /// Templates recommended for the profile's objective
    Recommended,
    /// Templates of one concrete category
    Category(TemplateCategory),
}

impl CategoryFilter {
    /// Filters offered to the user, in display order
    pub fn options() -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All, CategoryFilter::Recommended];
        options.extend(TemplateCategory::NAMED.iter().copied().map(CategoryFilter::Category));
        options
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => ALL_CATEGORY_NAME,
            Self::Recommended => RECOMMENDED_CATEGORY_NAME,
            Self::Category(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
