use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::ObjectTypeDefinition;
use crate::ast::TypeDefinition;
use crate::convert_document;
use crate::ConvertOptions;
use crate::Node;
use crate::TraversalControl;
use crate::Traverser;
use crate::TraverserContext;
use crate::Visitor;
use libgql_syntax::parse_document;
use std::sync::Arc;

/// Parses and converts `source`, asserting that it is free of syntax errors.
pub fn convert_clean(source: &str) -> Document {
    let parsed = parse_document(source, None);
    assert!(
        parsed.errors.is_empty(),
        "unexpected syntax errors: {:?}",
        parsed.errors,
    );
    convert_document(&parsed.tree, &ConvertOptions::default())
}

/// Parses and converts `source`, ignoring syntax errors.
pub fn convert_lenient(source: &str) -> Document {
    let parsed = parse_document(source, None);
    convert_document(&parsed.tree, &ConvertOptions::default())
}

/// Finds the object type (or object type extension) called `name`.
pub fn object_type<'a>(
    document: &'a Document,
    name: &str,
) -> &'a Arc<ObjectTypeDefinition> {
    document
        .definitions
        .iter()
        .find_map(|def| match def {
            Definition::Type(TypeDefinition::Object(object)) if object.name == name => {
                Some(object)
            },
            _ => None,
        })
        .unwrap_or_else(|| panic!("no object type named `{name}`"))
}

pub fn field_names(object: &ObjectTypeDefinition) -> Vec<&str> {
    object.fields.iter().map(|field| field.name.as_str()).collect()
}

struct CollectNodes;

impl Visitor<Vec<Node>> for CollectNodes {
    fn enter(&mut self, ctx: &mut TraverserContext<'_, Vec<Node>>) -> TraversalControl {
        let node = ctx.node().clone();
        ctx.accumulator_mut().push(node);
        TraversalControl::Continue
    }
}

/// Every node under (and including) `root`, in pre-order.
pub fn all_nodes(root: &Node) -> Vec<Node> {
    let mut nodes = vec![];
    Traverser::pre_order().traverse(root, &mut CollectNodes, &mut nodes);
    nodes
}

/// A schema that exercises every type-system node kind.
pub const KITCHEN_SINK_SCHEMA: &str = r#"
schema @link(url: "https://example.com") {
  query: Query
  mutation: Mutation
}

"""
Something with an identity.
"""
interface Node {
  id: ID!
}

"A user of the system."
type User implements Node @key(fields: "id") {
  id: ID!
  name(format: NameFormat = FULL, locale: String): String
  friends(first: Int = 10, after: [String!]): [User!]!
}

extend type User {
  email: String @deprecated(reason: "privacy")
}

union SearchResult = User | Post

enum NameFormat {
  FULL
  SHORT @deprecated
}

scalar DateTime @specifiedBy(url: "https://example.com/datetime")

input PostFilter {
  authors: [ID!] = []
  since: DateTime
  limits: Limits = {max: 1.5e3, strict: true, tags: [null, "a\nb"]}
}

directive @key(fields: String!) repeatable on OBJECT | INTERFACE

type Query {
  node(id: ID!): Node
  search(filter: PostFilter): [SearchResult!]!
}
"#;

/// An executable document that exercises every executable node kind.
pub const KITCHEN_SINK_QUERY: &str = r#"
query Search($filter: PostFilter = {since: "2020"}, $first: Int! = 5) @cached {
  search(filter: $filter) {
    ... on User {
      id
      handle: name(format: SHORT)
      friends(first: $first) { id }
    }
    ...PostFields @include(if: true)
  }
}

fragment PostFields on Post {
  title
}

{ node(id: "1") { id } }
"#;
