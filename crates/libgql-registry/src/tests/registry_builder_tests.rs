use crate::tests::utils::build_from;
use crate::tests::utils::field_names;
use crate::CompositeRegistryBuilder;
use crate::DefinitionName;
use crate::NamedCompositeBuilder;
use crate::RegistryError;
use crate::SdlDefinitionKind;
use libgql_ast::ast::SourceLocation;
use libgql_ast::ast::TypeKind;
use libgql_ast::deep_equal;
use libgql_ast::parse_and_convert;
use libgql_ast::Node;

#[test]
fn extensions_merge_regardless_of_document_order() {
    let base = ("base.graphql", "type Query { a: Int }");
    let extension = ("ext.graphql", "extend type Query { b: Int }");

    let base_first = build_from(&[base, extension]);
    let extension_first = build_from(&[extension, base]);
    assert!(base_first.is_valid());
    assert!(extension_first.is_valid());

    let merged_a = base_first.registry.merged_type_definition("Query").unwrap();
    let merged_b = extension_first.registry.merged_type_definition("Query").unwrap();
    assert_eq!(field_names(&merged_a), vec!["a", "b"]);
    assert!(deep_equal(&Node::from(merged_a), &Node::from(merged_b)));
}

#[test]
fn duplicate_base_keeps_first_and_reports_second() {
    let result = build_from(&[
        ("one.graphql", "type User { id: ID }"),
        ("two.graphql", "type User { name: String }"),
    ]);

    assert_eq!(
        result.errors,
        vec![RegistryError::DuplicateTypeDefinition {
            type_name: "User".to_string(),
            first_location: Some(SourceLocation::new(1, 1, Some("one.graphql".to_string()))),
            duplicate_location: Some(SourceLocation::new(1, 1, Some("two.graphql".to_string()))),
        }],
    );
    let user = result.registry.type_definition("User").unwrap();
    assert_eq!(field_names(user), vec!["id"]);
}

#[test]
fn every_duplicate_is_reported() {
    let result = build_from(&[
        ("a.graphql", "scalar Date"),
        ("b.graphql", "scalar Date"),
        ("c.graphql", "scalar Date"),
    ]);
    assert_eq!(result.errors.len(), 2);
    let rejected: Vec<_> = result
        .errors
        .iter()
        .filter_map(|err| err.rejected_location())
        .filter_map(|loc| loc.source_name.as_deref())
        .collect();
    assert_eq!(rejected, vec!["b.graphql", "c.graphql"]);
}

#[test]
fn kind_mismatch_is_an_error_not_a_crash() {
    let result = build_from(&[
        ("a.graphql", "type Foo { a: Int }"),
        ("b.graphql", "interface Foo { b: Int }"),
        ("c.graphql", "extend union Foo = Bar"),
    ]);

    assert_eq!(result.errors.len(), 2);
    let RegistryError::TypeKindMismatch {
        expected,
        found,
        is_extension,
        ..
    } = &result.errors[0]
    else {
        panic!("expected a kind mismatch, got {:?}", result.errors[0]);
    };
    assert_eq!(*expected, SdlDefinitionKind::Type(TypeKind::Object));
    assert_eq!(*found, SdlDefinitionKind::Type(TypeKind::Interface));
    assert!(!is_extension);
    assert_eq!(
        result.errors[0].to_string(),
        "`Foo` is declared as object type but a later definition declares it as interface type",
    );

    assert!(matches!(
        &result.errors[1],
        RegistryError::TypeKindMismatch { is_extension: true, .. },
    ));
    assert_eq!(result.registry.type_kind("Foo"), Some(TypeKind::Object));
    assert_eq!(field_names(result.registry.type_definition("Foo").unwrap()), vec!["a"]);
}

#[test]
fn accumulator_kind_comes_from_first_definition() {
    let mut builder = CompositeRegistryBuilder::new();
    builder.add_document(&parse_and_convert(
        "extend enum Color { RED }\ninput Color { r: Int }\nenum Color { BLUE }",
        None,
    ));

    let Some(NamedCompositeBuilder::Enum(accumulator)) =
        builder.accumulator(&DefinitionName::Type("Color".to_string()))
    else {
        panic!("expected an enum accumulator");
    };
    assert_eq!(accumulator.base().map(|def| def.name.as_str()), Some("Color"));
    assert_eq!(accumulator.extensions().len(), 1);
    assert_eq!(accumulator.mismatched().len(), 1);

    // The mismatched input object is rejected against the enum base.
    let result = builder.build();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.registry.type_kind("Color"), Some(TypeKind::Enum));
    assert_eq!(result.registry.type_extensions("Color").len(), 1);
}

#[test]
fn earlier_extension_outranks_later_base_of_another_kind() {
    let result = build_from(&[
        ("a.graphql", "extend interface Foo { a: Int }"),
        ("b.graphql", "type Foo { b: Int }"),
    ]);

    assert_eq!(result.registry.type_kind("Foo"), None);
    assert_eq!(result.registry.type_extensions("Foo").len(), 1);
    assert_eq!(
        result.registry.type_extensions("Foo")[0].type_kind(),
        TypeKind::Interface,
    );
    assert_eq!(
        result.errors,
        vec![RegistryError::TypeKindMismatch {
            type_name: "Foo".to_string(),
            expected: SdlDefinitionKind::Type(TypeKind::Interface),
            found: SdlDefinitionKind::Type(TypeKind::Object),
            is_extension: false,
            first_location: Some(SourceLocation::new(1, 1, Some("a.graphql".to_string()))),
            mismatch_location: Some(SourceLocation::new(1, 1, Some("b.graphql".to_string()))),
        }],
    );
}

#[test]
fn duplicate_directives_are_reported() {
    let result = build_from(&[
        ("a.graphql", "directive @key(fields: String!) on OBJECT"),
        ("b.graphql", "directive @key(fields: [String!]!) repeatable on OBJECT"),
    ]);

    assert!(matches!(
        &result.errors[..],
        [RegistryError::DuplicateDirectiveDefinition { directive_name, .. }] if directive_name == "key",
    ));
    assert!(!result.registry.directive_definition("key").unwrap().repeatable);
}

#[test]
fn directives_and_types_do_not_share_names() {
    let result = build_from(&[("a.graphql", "directive @Foo on FIELD\ntype Foo { a: Int }")]);
    assert!(result.is_valid());
    assert!(result.registry.directive_definition("Foo").is_some());
    assert!(result.registry.type_definition("Foo").is_some());
}

#[test]
fn schema_definitions_use_a_single_accumulator() {
    let result = build_from(&[
        ("a.graphql", "extend schema @link(url: \"x\")"),
        ("b.graphql", "schema { query: Query }"),
        ("c.graphql", "schema { query: Root }"),
    ]);

    assert_eq!(result.errors.len(), 1);
    assert!(matches!(result.errors[0], RegistryError::DuplicateSchemaDefinition { .. }));
    assert_eq!(
        result.errors[0]
            .locations()
            .iter()
            .map(|loc| loc.source_name.as_deref())
            .collect::<Vec<_>>(),
        vec![Some("b.graphql"), Some("c.graphql")],
    );

    let schema = result.registry.schema_definition().unwrap();
    assert_eq!(schema.operation_types[0].type_name.name, "Query");
    assert_eq!(result.registry.schema_extensions().len(), 1);
}

#[test]
fn executable_definitions_are_ignored() {
    let result = build_from(&[(
        "mixed.graphql",
        "query Q { a }\nfragment F on Query { a }\ntype Query { a: Int }",
    )]);
    assert!(result.is_valid());
    assert_eq!(result.registry.types().count(), 1);
}

#[test]
fn orphan_extensions_are_kept() {
    let result = build_from(&[("a.graphql", "extend type Ghost { a: Int }\ntype Real { b: Int }")]);
    assert!(result.is_valid());
    assert!(result.registry.merged_type_definition("Ghost").is_none());
    let orphans: Vec<_> = result.registry.orphan_extensions().map(|def| def.name()).collect();
    assert_eq!(orphans, vec!["Ghost"]);
}

#[test]
fn malformed_definitions_do_not_discard_their_document() {
    let result = build_from(&[
        ("broken.graphql", "type Broken { field: }\ntype Fine { a: Int }\ntype { b: Int }"),
        ("other.graphql", "extend type Fine { c: Int }"),
    ]);

    assert!(result.is_valid());
    let broken = result.registry.type_definition("Broken").unwrap();
    assert!(field_names(broken).is_empty());
    let fine = result.registry.merged_type_definition("Fine").unwrap();
    assert_eq!(field_names(&fine), vec!["a", "c"]);
}

#[test]
fn into_result_requires_a_clean_build() {
    let clean = build_from(&[("a.graphql", "scalar A")]);
    assert!(clean.into_result().is_ok());

    let dirty = build_from(&[("a.graphql", "scalar A\nscalar A")]);
    let errors = dirty.into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
}
