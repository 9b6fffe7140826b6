use crate::tests::utils::build_from;
use crate::Registry;
use crate::RegistryError;
use crate::SdlDefinition;
use libgql_ast::ast::Definition;
use libgql_ast::parse_and_convert;
use libgql_ast::print_document;

fn sdl_definitions(source: &str) -> Vec<SdlDefinition> {
    parse_and_convert(source, None)
        .definitions
        .iter()
        .filter_map(SdlDefinition::from_definition)
        .collect()
}

#[test]
fn merged_view_appends_extension_contents() {
    let result = build_from(&[
        (
            "base.graphql",
            "interface Node { id: ID! }\n\
             interface Named implements Node { id: ID! }\n\
             union Result = A\n\
             enum Color { RED }\n\
             input Filter { q: String }\n\
             scalar Date",
        ),
        (
            "ext.graphql",
            "extend interface Named @tag { name: String }\n\
             extend union Result = B | C\n\
             extend enum Color { GREEN }\n\
             extend input Filter { limit: Int }\n\
             extend scalar Date @specifiedBy(url: \"https://example.com\")",
        ),
    ]);
    assert!(result.is_valid());
    let registry = &result.registry;

    let merged = |name: &str| registry.merged_type_definition(name).unwrap().to_source();
    assert_eq!(
        merged("Named"),
        "interface Named implements Node @tag {\n  id: ID!\n  name: String\n}\n",
    );
    assert_eq!(merged("Result"), "union Result = A | B | C\n");
    assert_eq!(merged("Color"), "enum Color {\n  RED\n  GREEN\n}\n");
    assert_eq!(merged("Filter"), "input Filter {\n  q: String\n  limit: Int\n}\n");
    assert_eq!(
        merged("Date"),
        "scalar Date @specifiedBy(url: \"https://example.com\")\n",
    );

    // The stored base is not modified by merging.
    assert_eq!(
        registry.type_definition("Color").unwrap().to_source(),
        "enum Color {\n  RED\n}\n",
    );
    assert_eq!(registry.type_extensions("Color").len(), 1);
    assert!(registry.type_extensions("Node").is_empty());
}

#[test]
fn merged_view_keeps_base_metadata() {
    let result = build_from(&[
        ("a.graphql", "\"Users.\"\ntype User { id: ID }"),
        ("b.graphql", "extend type User { name: String }"),
    ]);
    let merged = result.registry.merged_type_definition("User").unwrap();
    assert_eq!(merged.description().map(|d| d.content.as_str()), Some("Users."));
    assert!(!merged.is_extension());
    assert_eq!(
        merged.location().and_then(|loc| loc.source_name.as_deref()),
        Some("a.graphql"),
    );
}

#[test]
fn to_document_lists_everything_in_registry_order() {
    let result = build_from(&[(
        "a.graphql",
        "extend type Orphan { x: Int }\n\
         type Query { a: Int }\n\
         directive @d on FIELD\n\
         extend type Query { b: Int }\n\
         schema { query: Query }",
    )]);
    assert!(result.is_valid());

    assert_eq!(
        print_document(&result.registry.to_document()),
        "schema {\n  query: Query\n}\n\n\
         directive @d on FIELD\n\n\
         type Query {\n  a: Int\n}\n\n\
         extend type Query {\n  b: Int\n}\n\n\
         extend type Orphan {\n  x: Int\n}\n",
    );
}

#[test]
fn rejected_adds_leave_the_registry_unchanged() {
    let mut registry = Registry::new();
    let mut definitions = sdl_definitions(
        "extend type Foo { a: Int }\n\
         input Foo { b: Int }\n\
         type Foo { c: Int }\n\
         extend interface Foo { d: Int }",
    )
    .into_iter();

    assert_eq!(registry.add(definitions.next().unwrap()), Ok(()));

    // An extension established `Foo` as an object type before any base.
    let mismatch = registry.add(definitions.next().unwrap()).unwrap_err();
    assert!(matches!(
        mismatch,
        RegistryError::TypeKindMismatch { is_extension: false, .. },
    ));
    assert!(registry.type_definition("Foo").is_none());

    assert_eq!(registry.add(definitions.next().unwrap()), Ok(()));
    assert!(registry.add(definitions.next().unwrap()).is_err());
    assert_eq!(registry.type_extensions("Foo").len(), 1);
    assert_eq!(registry.orphan_extensions().count(), 0);
}

#[test]
fn sdl_definitions_report_their_identity() {
    let definitions = sdl_definitions("schema { query: Q }\ndirective @d on FIELD\nextend type T { a: Int }");
    let summary: Vec<_> = definitions
        .iter()
        .map(|def| (def.name(), def.kind().to_string(), def.is_extension()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (None, "schema".to_string(), false),
            (Some("d"), "directive".to_string(), false),
            (Some("T"), "object type".to_string(), true),
        ],
    );

    let round_tripped: Definition = definitions[1].clone().into();
    assert!(matches!(round_tripped, Definition::Directive(_)));
    assert!(SdlDefinition::from_definition(&parse_and_convert("{ a }", None).definitions[0]).is_none());
}

#[test]
fn registry_survives_bincode_encoding() {
    let result = build_from(&[(
        "a.graphql",
        "type Query { a(x: Int = 1): [String!] @deprecated }\nextend type Query { b: Int }\nscalar Date",
    )]);
    let config = bincode::config::standard();
    let bytes = bincode::serde::encode_to_vec(&result.registry, config).unwrap();
    let (decoded, _): (Registry, usize) = bincode::serde::decode_from_slice(&bytes, config).unwrap();
    assert_eq!(decoded, result.registry);
}

#[test]
fn empty_registry() {
    let registry = build_from(&[]).registry;
    assert!(registry.is_empty());
    assert!(registry.to_document().definitions.is_empty());
}
