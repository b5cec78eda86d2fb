//! Registration macros for built-in templates

/// Macro to register a template constructor with the built-in catalog.
///
/// `$order` positions the template in catalog listings.
#[macro_export]
macro_rules! register_template {
    ($constructor:path, $name:expr, $order:expr) => {
        inventory::submit! {
            $crate::registry::registries::TemplateRegistration {
                name: $name,
                order: $order,
                constructor: $constructor,
            }
        }
    };
}
