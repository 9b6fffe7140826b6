//! Tests for the shape of trees produced from well-formed documents.

use crate::parse_document;
use crate::tests::utils::child_kinds;
use crate::tests::utils::find_first;
use crate::tests::utils::parse_clean;
use crate::tests::utils::significant_children;
use crate::ConcreteSyntaxNode;
use crate::SyntaxKind;

#[test]
fn empty_document_has_no_children() {
    let tree = parse_clean("");
    assert_eq!(tree.kind(), SyntaxKind::Document);
    assert!(tree.child_nodes().is_empty());
}

/// Verifies the layout of an object type definition: keyword, name,
/// implemented interfaces, directives and flattened field definitions.
#[test]
fn object_type_definition_shape() {
    let tree = parse_clean(
        "type User implements Node & Entity @key(fields: \"id\") { id: ID! }",
    );
    let object = &tree.child_nodes()[0];
    assert_eq!(object.kind(), SyntaxKind::ObjectTypeDefinition);

    let kinds: Vec<SyntaxKind> =
        significant_children(object).iter().map(|n| n.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Keyword,
            SyntaxKind::Name,
            SyntaxKind::Keyword,
            SyntaxKind::NamedType,
            SyntaxKind::NamedType,
            SyntaxKind::Directive,
            SyntaxKind::FieldDefinition,
        ],
    );

    let field = find_first(object, SyntaxKind::FieldDefinition).unwrap();
    let non_null = field.first_child_of_kind(SyntaxKind::NonNullType).unwrap();
    assert_eq!(non_null.child_nodes()[0].kind(), SyntaxKind::NamedType);
    assert_eq!(non_null.text(), "ID !");
}

#[test]
fn legacy_space_separated_interfaces() {
    let tree = parse_clean("type A implements B, C { f: Int }");
    let object = &tree.child_nodes()[0];
    let interfaces: Vec<_> = object
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::NamedType)
        .map(|child| child.text().into_owned())
        .collect();
    assert_eq!(interfaces, vec!["B", "C"]);
}

#[test]
fn description_wraps_string_leaf() {
    let tree = parse_clean("\"\"\"The root\"\"\" type Query { \"a field\" a: Int }");
    let object = &tree.child_nodes()[0];
    let description = &object.child_nodes()[0];
    assert_eq!(description.kind(), SyntaxKind::Description);
    assert_eq!(description.child_nodes()[0].kind(), SyntaxKind::StringValue);
    assert_eq!(description.child_nodes()[0].text(), "\"\"\"The root\"\"\"");

    let field = find_first(object, SyntaxKind::FieldDefinition).unwrap();
    assert_eq!(field.child_nodes()[0].kind(), SyntaxKind::Description);
}

#[test]
fn extensions_start_with_extend_keyword() {
    let tree = parse_clean(
        "extend type A { b: Int } extend schema @dir extend union U = X | Y \
         extend enum E { F } extend input I { x: Int } extend scalar S @d \
         extend interface N { n: ID }",
    );
    let kinds = child_kinds(&tree);
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::ObjectTypeExtension,
            SyntaxKind::SchemaExtension,
            SyntaxKind::UnionTypeExtension,
            SyntaxKind::EnumTypeExtension,
            SyntaxKind::InputObjectTypeExtension,
            SyntaxKind::ScalarTypeExtension,
            SyntaxKind::InterfaceTypeExtension,
        ],
    );
    for ext in tree.child_nodes() {
        assert_eq!(ext.child_nodes()[0].kind(), SyntaxKind::Keyword);
        assert_eq!(ext.child_nodes()[0].text(), "extend");
    }
}

#[test]
fn union_members_are_named_types() {
    let tree = parse_clean("union U = | A | B");
    let union = &tree.child_nodes()[0];
    let members: Vec<_> = union
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::NamedType)
        .map(|child| child.text().into_owned())
        .collect();
    assert_eq!(members, vec!["A", "B"]);
}

#[test]
fn directive_definition_shape() {
    let tree = parse_clean(
        "directive @cache(ttl: Int = 60) repeatable on FIELD_DEFINITION | OBJECT",
    );
    let directive = &tree.child_nodes()[0];
    assert_eq!(directive.kind(), SyntaxKind::DirectiveDefinition);
    let input = find_first(directive, SyntaxKind::InputValueDefinition).unwrap();
    assert!(input.first_child_of_kind(SyntaxKind::DefaultValue).is_some());

    let keywords: Vec<_> = directive
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::Keyword)
        .map(|child| child.text().into_owned())
        .collect();
    assert_eq!(keywords, vec!["directive", "repeatable", "on"]);

    let locations: Vec<_> = directive
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::DirectiveLocation)
        .map(|child| child.text().into_owned())
        .collect();
    assert_eq!(locations, vec!["FIELD_DEFINITION", "OBJECT"]);
}

#[test]
fn schema_definition_shape() {
    let tree = parse_clean("schema { query: Q mutation: M }");
    let schema = &tree.child_nodes()[0];
    let op_types: Vec<_> = schema
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::OperationTypeDefinition)
        .collect();
    assert_eq!(op_types.len(), 2);
    assert_eq!(op_types[1].child_nodes()[0].text(), "mutation");
    assert_eq!(
        op_types[1].first_child_of_kind(SyntaxKind::NamedType).unwrap().text(),
        "M",
    );
}

#[test]
fn anonymous_query_shorthand() {
    let tree = parse_clean("{ me { id } }");
    let operation = &tree.child_nodes()[0];
    assert_eq!(operation.kind(), SyntaxKind::OperationDefinition);
    assert_eq!(child_kinds(operation), vec![SyntaxKind::SelectionSet]);
}

#[test]
fn operation_with_variables_and_aliases() {
    let tree = parse_clean(
        "query Q($id: ID! = \"1\", $n: [Int]) @live { u: user(id: $id) { name } }",
    );
    let operation = &tree.child_nodes()[0];
    let variables: Vec<_> = operation
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::VariableDefinition)
        .collect();
    assert_eq!(variables.len(), 2);
    assert_eq!(variables[0].child_nodes()[0].kind(), SyntaxKind::Variable);
    assert!(variables[0].first_child_of_kind(SyntaxKind::DefaultValue).is_some());

    let field = find_first(operation, SyntaxKind::Field).unwrap();
    let alias = field.first_child_of_kind(SyntaxKind::Alias).unwrap();
    assert_eq!(alias.child_nodes()[0].text(), "u");
    assert_eq!(field.first_child_of_kind(SyntaxKind::Name).unwrap().text(), "user");

    let argument = find_first(field, SyntaxKind::Argument).unwrap();
    let variable = argument.first_child_of_kind(SyntaxKind::Variable).unwrap();
    assert_eq!(variable.first_child_of_kind(SyntaxKind::Name).unwrap().text(), "id");
}

#[test]
fn fragments_and_inline_fragments() {
    let tree = parse_clean(
        "fragment F on User @d { ...G ... on Admin { level } ... @skip(if: true) { x } }",
    );
    let fragment = &tree.child_nodes()[0];
    assert_eq!(fragment.kind(), SyntaxKind::FragmentDefinition);
    let condition = fragment.first_child_of_kind(SyntaxKind::TypeCondition).unwrap();
    assert_eq!(condition.text(), "on User");

    let selections = fragment.first_child_of_kind(SyntaxKind::SelectionSet).unwrap();
    let kinds: Vec<_> = significant_children(selections)
        .iter()
        .map(|n| n.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::FragmentSpread,
            SyntaxKind::InlineFragment,
            SyntaxKind::InlineFragment,
        ],
    );
    let untyped = significant_children(selections)[2];
    assert!(untyped.first_child_of_kind(SyntaxKind::TypeCondition).is_none());
}

#[test]
fn value_kinds() {
    let tree = parse_clean(
        "{ f(a: 1, b: 2.5, c: \"s\", d: true, e: null, g: RED, h: [1 2], i: {x: 1}) }",
    );
    let field = find_first(&tree, SyntaxKind::Field).unwrap();
    let value_kinds: Vec<_> = field
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::Argument)
        .map(|arg| significant_children(arg)[1].kind())
        .collect();
    assert_eq!(
        value_kinds,
        vec![
            SyntaxKind::IntValue,
            SyntaxKind::FloatValue,
            SyntaxKind::StringValue,
            SyntaxKind::BooleanValue,
            SyntaxKind::NullValue,
            SyntaxKind::EnumValue,
            SyntaxKind::ListValue,
            SyntaxKind::ObjectValue,
        ],
    );
}

/// Verifies that comments become leaves ahead of the node they precede, and
/// that the node's position skips past them.
#[test]
fn comments_are_leading_children() {
    let tree = parse_clean("# about Foo\ntype Foo { a: Int }\n# trailing\n");
    let object = &tree.child_nodes()[0];
    assert_eq!(object.child_nodes()[0].kind(), SyntaxKind::Comment);
    assert_eq!(object.child_nodes()[0].text(), "# about Foo");
    assert_eq!(object.position().unwrap().line(), 2);

    let last = tree.child_nodes().last().unwrap();
    assert_eq!(last.kind(), SyntaxKind::Comment);
    assert_eq!(last.text(), "# trailing");
}

#[test]
fn positions_carry_source_name() {
    let output = parse_document("\n  scalar Date", Some("schema.graphql"));
    let scalar = &output.tree.child_nodes()[0];
    let position = scalar.location().unwrap();
    assert_eq!(position.line(), 2);
    assert_eq!(position.column(), 3);
    assert_eq!(position.source_name(), Some("schema.graphql"));
    assert_eq!(position.to_string(), "schema.graphql:2:3");
}

/// Keywords are only significant in keyword position; elsewhere they are
/// ordinary names.
#[test]
fn keywords_usable_as_names() {
    let tree = parse_clean("type type { query: input, on: fragment }");
    let object = &tree.child_nodes()[0];
    assert_eq!(object.first_child_of_kind(SyntaxKind::Name).unwrap().text(), "type");
    let fields: Vec<_> = object
        .child_nodes()
        .iter()
        .filter(|child| child.kind() == SyntaxKind::FieldDefinition)
        .collect();
    assert_eq!(fields.len(), 2);
}
