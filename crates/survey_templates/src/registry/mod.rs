pub mod macros;
pub mod registries;

pub use registries::{Catalog, CatalogDocument, TemplateRegistration};
