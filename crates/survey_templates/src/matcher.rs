//! Catalog matching by category, objective and keyword search

use crate::types::{CategoryFilter, Profile, Template, OTHER_OBJECTIVE};

/// Pick the category a listing should open on.
///
/// A search always widens to every template; otherwise a profile with a
/// meaningful objective starts on its recommendations.
pub fn default_category_filter(profile: &Profile, search: Option<&str>) -> CategoryFilter {
    default_category_filter_with(profile, search, OTHER_OBJECTIVE)
}

/// Same as [`default_category_filter`] with a configurable "other" objective
pub fn default_category_filter_with(
    profile: &Profile,
    search: Option<&str>,
    other_objective: &str,
) -> CategoryFilter {
    if search.is_some_and(|s| !s.is_empty()) {
        CategoryFilter::All
    } else if profile.recommendation_objective(other_objective).is_some() {
        CategoryFilter::Recommended
    } else {
        CategoryFilter::All
    }
}

/// Filter options for listing templates
#[derive(Debug, Clone, Default)]
pub struct TemplateFilter {
    /// Category selection
    pub category: CategoryFilter,

    /// Search in name and description
    pub search: Option<String>,
}

impl TemplateFilter {
    /// Create a filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter a listing opens on for this profile and search
    pub fn for_profile(profile: &Profile, search: Option<&str>) -> Self {
        Self {
            category: default_category_filter(profile, search),
            search: search.map(str::to_string),
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Check if a template matches this filter
    pub fn matches(&self, template: &Template, profile: &Profile) -> bool {
        matches_category(template, profile, self.category)
            && matches_search(template, self.search.as_deref())
    }

    /// Apply the filter to a catalog, keeping catalog order
    pub fn apply<'a>(&self, catalog: &'a [Template], profile: &Profile) -> Vec<&'a Template> {
        catalog
            .iter()
            .filter(|template| self.matches(template, profile))
            .collect()
    }
}

/// Category predicate
pub fn matches_category(template: &Template, profile: &Profile, filter: CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Category(category) => template.category == category,
        CategoryFilter::Recommended => profile
            .objective
            .as_deref()
            .filter(|o| !o.is_empty())
            .is_some_and(|objective| template.is_recommended_for(objective)),
    }
}

/// Search predicate: every query word must appear in the name or the description
pub fn matches_search(template: &Template, search: Option<&str>) -> bool {
    let query = match search {
        Some(query) if !query.is_empty() => query.to_lowercase(),
        _ => return true,
    };

    let name = template.name.to_lowercase();
    let description = template.description.to_lowercase();

    query
        .split_whitespace()
        .all(|word| name.contains(word) || description.contains(word))
}

/// Templates of `catalog` matching both the category and the search, in catalog order
pub fn match_templates<'a>(
    catalog: &'a [Template],
    profile: &Profile,
    category: CategoryFilter,
    search: Option<&str>,
) -> Vec<&'a Template> {
    let matched: Vec<&Template> = catalog
        .iter()
        .filter(|t| matches_category(t, profile, category) && matches_search(t, search))
        .collect();
    log::debug!(
        "Matched {} of {} templates (category: {}, search: {:?})",
        matched.len(),
        catalog.len(),
        category,
        search
    );
    matched
}
