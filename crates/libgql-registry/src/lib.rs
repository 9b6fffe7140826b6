//! Merges the type-system definitions of many GraphQL documents into a
//! single [`Registry`].
//!
//! Assembly is two-phase. A [`CompositeRegistryBuilder`] first accumulates
//! every definition and extension by declared name, in whatever order the
//! documents arrive; [`build`](CompositeRegistryBuilder::build) then adds
//! them to a fresh [`Registry`] one at a time. A rejected add never aborts
//! the build: it becomes one [`RegistryError`] in the returned
//! [`RegistryBuildResult`], next to a best-effort registry.
//!
//! ```
//! use libgql_ast::parse_and_convert;
//! use libgql_registry::CompositeRegistryBuilder;
//!
//! let mut builder = CompositeRegistryBuilder::new();
//! builder.add_document(&parse_and_convert("extend type Query { b: Int }", None));
//! builder.add_document(&parse_and_convert("type Query { a: Int }", None));
//!
//! let result = builder.build();
//! assert!(result.is_valid());
//!
//! let query = result.registry.merged_type_definition("Query").unwrap();
//! assert_eq!(query.to_source(), "type Query {\n  a: Int\n  b: Int\n}\n");
//! ```

mod composite_definition_builder;
mod registry;
mod registry_builder;
mod registry_error;
mod sdl_definition;

pub use composite_definition_builder::CompositeDefinitionBuilder;
pub use registry::Registry;
pub use registry_builder::CompositeRegistryBuilder;
pub use registry_builder::DefinitionName;
pub use registry_builder::NamedCompositeBuilder;
pub use registry_builder::RegistryBuildResult;
pub use registry_error::RegistryError;
pub use sdl_definition::SdlDefinition;
pub use sdl_definition::SdlDefinitionKind;

#[cfg(test)]
mod tests;
