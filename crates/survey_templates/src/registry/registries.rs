//! Template registration table and the catalog built from it

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::config::TemplateConfig;
use crate::error::{TemplateError, TemplateResult};
use crate::matcher::{default_category_filter_with, match_templates};
use crate::presets::custom_survey;
use crate::types::{CategoryFilter, Profile, Template, OTHER_OBJECTIVE};

/// Template registration information
pub struct TemplateRegistration {
    /// The unique name of the template
    pub name: &'static str,
    /// Position of the template in the built-in catalog
    pub order: u32,
    /// Constructor function that builds the template
    pub constructor: fn() -> Template,
}

// Compile-time collection of all template registrations
inventory::collect!(TemplateRegistration);

/// On-disk shape of a catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// The blank starting point, always listed first
    pub custom: Template,
    #[serde(default)]
    pub templates: Vec<Template>,
}

/// An immutable, validated set of templates
#[derive(Debug, Clone)]
pub struct Catalog {
    custom: Template,
    templates: Vec<Template>,
    other_objective: String,
}

impl Catalog {
    /// Build a catalog, rejecting malformed templates and duplicate names
    pub fn new(custom: Template, templates: Vec<Template>) -> TemplateResult<Self> {
        let mut names = HashSet::new();
        for template in std::iter::once(&custom).chain(templates.iter()) {
            template.validate()?;
            if !names.insert(template.name.as_str()) {
                return Err(TemplateError::DuplicateTemplate(template.name.clone()));
            }
        }

        log::info!("Built template catalog with {} templates", templates.len());
        Ok(Self {
            custom,
            templates,
            other_objective: OTHER_OBJECTIVE.to_string(),
        })
    }

    /// Catalog of all registered built-in templates
    pub fn builtin() -> TemplateResult<Self> {
        let mut registrations: Vec<&TemplateRegistration> =
            inventory::iter::<TemplateRegistration>().collect();
        registrations.sort_by(|a, b| a.order.cmp(&b.order).then(a.name.cmp(b.name)));

        let templates = registrations
            .into_iter()
            .map(|reg| {
                let template = (reg.constructor)();
                if template.name != reg.name {
                    log::warn!(
                        "Template registered as {} is named {}",
                        reg.name,
                        template.name
                    );
                }
                template
            })
            .collect();

        Self::new(custom_survey(), templates)
    }

    /// Catalog selected by the configuration: the configured file, or the built-ins
    pub fn from_config(config: &TemplateConfig) -> TemplateResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Self::load(path)?,
            None => Self::builtin()?,
        };
        Ok(catalog.with_other_objective(config.other_objective.clone()))
    }

    pub fn from_document(document: CatalogDocument) -> TemplateResult<Self> {
        Self::new(document.custom, document.templates)
    }

    pub fn from_yaml(yaml: &str) -> TemplateResult<Self> {
        Self::from_document(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Self::from_document(serde_json::from_str(json)?)
    }

    /// Load a catalog document; `.json` files are read as JSON, anything else as YAML
    pub fn load(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading template catalog from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Use a different "no objective" sentinel for default filters
    pub fn with_other_objective(mut self, other_objective: impl Into<String>) -> Self {
        self.other_objective = other_objective.into();
        self
    }

    /// The blank template
    pub fn custom(&self) -> &Template {
        &self.custom
    }

    /// Templates in catalog order, without the blank template
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Get a template by name, including the blank template
    pub fn get(&self, name: &str) -> Option<&Template> {
        std::iter::once(&self.custom)
            .chain(self.templates.iter())
            .find(|t| t.name == name)
    }

    pub fn require(&self, name: &str) -> TemplateResult<&Template> {
        self.get(name)
            .ok_or_else(|| TemplateError::TemplateNotFound(name.to_string()))
    }

    /// The category a listing should open on
    pub fn default_filter(&self, profile: &Profile, search: Option<&str>) -> CategoryFilter {
        default_category_filter_with(profile, search, &self.other_objective)
    }

    /// Templates matching the filter and search, in catalog order
    pub fn matching(
        &self,
        profile: &Profile,
        category: CategoryFilter,
        search: Option<&str>,
    ) -> Vec<&Template> {
        match_templates(&self.templates, profile, category, search)
    }

    /// What a listing shows: the blank template, then the matching templates
    pub fn visible(
        &self,
        profile: &Profile,
        category: CategoryFilter,
        search: Option<&str>,
    ) -> Vec<&Template> {
        std::iter::once(&self.custom)
            .chain(self.matching(profile, category, search))
            .collect()
    }
}
