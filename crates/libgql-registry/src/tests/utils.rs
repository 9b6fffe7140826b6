use crate::CompositeRegistryBuilder;
use crate::RegistryBuildResult;
use libgql_ast::ast::ImplementingType;
use libgql_ast::ast::TypeDefinition;
use libgql_ast::parse_and_convert;

/// Builds a registry from `(source_name, source)` pairs, in order.
pub fn build_from(sources: &[(&str, &str)]) -> RegistryBuildResult {
    let mut builder = CompositeRegistryBuilder::new();
    for (source_name, source) in sources {
        builder.add_document(&parse_and_convert(source, Some(source_name)));
    }
    builder.build()
}

pub fn field_names(def: &TypeDefinition) -> Vec<String> {
    def.as_implementing_type()
        .map(|def| def.fields().iter().map(|field| field.name.clone()).collect())
        .unwrap_or_default()
}
