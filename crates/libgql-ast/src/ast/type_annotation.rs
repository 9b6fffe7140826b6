use crate::ast::FromNode;
use crate::ast::ListType;
use crate::ast::Node;
use crate::ast::NonNullType;
use crate::ast::TypeName;
use crate::printer::SdlPrinter;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A type reference such as `String`, `[Int]` or `[ID!]!`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Type {
    Named(Arc<TypeName>),
    List(Arc<ListType>),
    NonNull(Arc<NonNullType>),
}

impl Type {
    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_name(&self) -> &str {
        match self {
            Type::Named(named) => &named.name,
            Type::List(list) => list.item_type.innermost_name(),
            Type::NonNull(non_null) => non_null.wrapped.innermost_name(),
        }
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        Node::from(self.clone()).print_to(printer);
    }
}

impl Default for Type {
    fn default() -> Self {
        Type::Named(Arc::default())
    }
}

impl From<Type> for Node {
    fn from(value: Type) -> Self {
        match value {
            Type::Named(t) => Node::TypeName(t),
            Type::List(t) => Node::ListType(t),
            Type::NonNull(t) => Node::NonNullType(t),
        }
    }
}

impl FromNode for Type {
    fn from_node(node: Node) -> Result<Self, Node> {
        Ok(match node {
            Node::TypeName(t) => Type::Named(t),
            Node::ListType(t) => Type::List(t),
            Node::NonNullType(t) => Type::NonNull(t),
            other => return Err(other),
        })
    }
}

/// The types a [`NonNullType`] may wrap. There is deliberately no
/// non-null variant: `T!!` cannot be expressed.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum NullableType {
    Named(Arc<TypeName>),
    List(Arc<ListType>),
}

impl NullableType {
    pub fn innermost_name(&self) -> &str {
        match self {
            NullableType::Named(named) => &named.name,
            NullableType::List(list) => list.item_type.innermost_name(),
        }
    }
}

impl Default for NullableType {
    fn default() -> Self {
        NullableType::Named(Arc::default())
    }
}

impl From<NullableType> for Type {
    fn from(value: NullableType) -> Self {
        match value {
            NullableType::Named(t) => Type::Named(t),
            NullableType::List(t) => Type::List(t),
        }
    }
}

impl From<NullableType> for Node {
    fn from(value: NullableType) -> Self {
        Type::from(value).into()
    }
}

impl FromNode for NullableType {
    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::TypeName(t) => Ok(NullableType::Named(t)),
            Node::ListType(t) => Ok(NullableType::List(t)),
            other => Err(other),
        }
    }
}
