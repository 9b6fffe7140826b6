use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FromNode;
use crate::ast::Node;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A top-level definition of a [`Document`](crate::ast::Document).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Definition {
    Operation(Arc<OperationDefinition>),
    Fragment(Arc<FragmentDefinition>),
    Schema(Arc<SchemaDefinition>),
    Directive(Arc<DirectiveDefinition>),
    Type(TypeDefinition),
}

impl Definition {
    /// Whether this is an operation or fragment (as opposed to a
    /// type-system definition).
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }
}

impl From<Definition> for Node {
    fn from(value: Definition) -> Self {
        match value {
            Definition::Operation(def) => Node::OperationDefinition(def),
            Definition::Fragment(def) => Node::FragmentDefinition(def),
            Definition::Schema(def) => Node::SchemaDefinition(def),
            Definition::Directive(def) => Node::DirectiveDefinition(def),
            Definition::Type(def) => def.into(),
        }
    }
}

impl From<TypeDefinition> for Definition {
    fn from(value: TypeDefinition) -> Self {
        Definition::Type(value)
    }
}

impl FromNode for Definition {
    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::OperationDefinition(def) => Ok(Definition::Operation(def)),
            Node::FragmentDefinition(def) => Ok(Definition::Fragment(def)),
            Node::SchemaDefinition(def) => Ok(Definition::Schema(def)),
            Node::DirectiveDefinition(def) => Ok(Definition::Directive(def)),
            other => TypeDefinition::from_node(other).map(Definition::Type),
        }
    }
}
