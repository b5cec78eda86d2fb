//! Product placeholder substitution
//!
//! Templates reference the product they are instantiated for through
//! `{{token}}` placeholders embedded in their text. Substitution always works
//! on a copy; catalog entries are shared across products and sessions.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

use crate::types::{Product, SurveyPreset, Template};

/// Placeholder tokens resolved from the product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{{productName}}`
    ProductName,
}

impl Placeholder {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "productName" => Some(Self::ProductName),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::ProductName => "productName",
        }
    }

    /// Value for this placeholder, empty when the product has none
    pub fn resolve<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            Self::ProductName => &product.name,
        }
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Replace every recognized placeholder in `text`; unknown tokens stay as written
pub fn replace_placeholders<'t>(text: &'t str, product: &Product) -> Cow<'t, str> {
    placeholder_pattern().replace_all(text, |caps: &Captures| {
        match Placeholder::from_key(&caps[1]) {
            Some(placeholder) => placeholder.resolve(product).to_string(),
            None => caps[0].to_string(),
        }
    })
}

fn replace_in(text: &mut String, product: &Product) {
    let replaced = match replace_placeholders(text, product) {
        Cow::Borrowed(_) => return,
        Cow::Owned(replaced) => replaced,
    };
    *text = replaced;
}

fn replace_in_opt(text: &mut Option<String>, product: &Product) {
    if let Some(text) = text.as_mut() {
        replace_in(text, product);
    }
}

fn replace_preset_placeholders(preset: &mut SurveyPreset, product: &Product) {
    replace_in(&mut preset.name, product);

    for question in &mut preset.questions {
        replace_in(&mut question.headline, product);
        replace_in_opt(&mut question.subheader, product);
        replace_in_opt(&mut question.placeholder, product);
        replace_in_opt(&mut question.button_label, product);
        replace_in_opt(&mut question.back_button_label, product);
        for choice in &mut question.choices {
            replace_in(&mut choice.label, product);
        }
    }

    if let Some(card) = preset.thank_you_card.as_mut() {
        replace_in_opt(&mut card.headline, product);
        replace_in_opt(&mut card.subheader, product);
    }
}

/// Produce a product-specific copy of `template`
///
/// Name, category and objectives are carried over untouched.
pub fn substitute(template: &Template, product: &Product) -> Template {
    let mut derived = template.clone();
    replace_in(&mut derived.description, product);
    replace_preset_placeholders(&mut derived.preset, product);
    log::debug!(
        "Substituted placeholders in template {} for product {}",
        template.name,
        product.id
    );
    derived
}
