use crate::ast::*;
use crate::printer::SdlPrinter;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// Converts a [`Node`] back into a typed child handle, handing the node back
/// when it is of the wrong kind.
pub trait FromNode: Sized {
    fn from_node(node: Node) -> Result<Self, Node>;
}

/// The coarse grouping that [`NodeVisitor`](crate::NodeVisitor) dispatches
/// on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum NodeCategory {
    Definition,
    TypeDefinition,
    Selection,
    Value,
    Type,
    Other,
}

macro_rules! define_node_kinds {
    ($($variant:ident => $category:ident),* $(,)?) => {
        /// A handle to any AST node.
        ///
        /// Cloning a `Node` only bumps a reference count.
        #[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
        pub enum Node {
            $($variant(Arc<$variant>),)*
        }

        /// The kind tag of a [`Node`].
        #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
        pub enum NodeKind {
            $($variant,)*
        }

        impl NodeKind {
            pub fn category(&self) -> NodeCategory {
                match self {
                    $(NodeKind::$variant => NodeCategory::$category,)*
                }
            }
        }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant,)*
                }
            }

            pub fn meta(&self) -> &NodeMeta {
                match self {
                    $(Node::$variant(node) => node.meta(),)*
                }
            }

            pub fn named_children(&self) -> NodeChildrenContainer {
                match self {
                    $(Node::$variant(node) => node.named_children(),)*
                }
            }

            pub fn try_with_new_children(
                &self,
                children: NodeChildrenContainer,
            ) -> Result<Node, ChildrenContractError> {
                Ok(match self {
                    $(Node::$variant(node) => Node::$variant(
                        Arc::new(node.try_with_new_children(children)?),
                    ),)*
                })
            }

            pub fn is_equal_to(&self, other: &Node) -> bool {
                match (self, other) {
                    $((Node::$variant(a), Node::$variant(b)) => a.is_equal_to(b),)*
                    _ => false,
                }
            }

            pub fn deep_copy(&self) -> Node {
                match self {
                    $(Node::$variant(node) => Node::$variant(
                        Arc::new(AstNode::deep_copy(node.as_ref())),
                    ),)*
                }
            }

            /// Whether both handles point at the very same allocation.
            pub fn ptr_eq(&self, other: &Node) -> bool {
                match (self, other) {
                    $((Node::$variant(a), Node::$variant(b)) => Arc::ptr_eq(a, b),)*
                    _ => false,
                }
            }

            pub fn print_to(&self, printer: &mut SdlPrinter) {
                match self {
                    $(Node::$variant(node) => node.print_to(printer),)*
                }
            }
        }

        $(
            impl From<Arc<$variant>> for Node {
                fn from(node: Arc<$variant>) -> Self {
                    Node::$variant(node)
                }
            }

            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(Arc::new(node))
                }
            }

            impl FromNode for Arc<$variant> {
                fn from_node(node: Node) -> Result<Self, Node> {
                    match node {
                        Node::$variant(node) => Ok(node),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

define_node_kinds! {
    Document => Other,

    OperationDefinition => Definition,
    FragmentDefinition => Definition,
    SchemaDefinition => Definition,
    DirectiveDefinition => Definition,

    ObjectTypeDefinition => TypeDefinition,
    InterfaceTypeDefinition => TypeDefinition,
    UnionTypeDefinition => TypeDefinition,
    EnumTypeDefinition => TypeDefinition,
    ScalarTypeDefinition => TypeDefinition,
    InputObjectTypeDefinition => TypeDefinition,

    Field => Selection,
    FragmentSpread => Selection,
    InlineFragment => Selection,

    IntValue => Value,
    FloatValue => Value,
    StringValue => Value,
    BooleanValue => Value,
    NullValue => Value,
    EnumValue => Value,
    ArrayValue => Value,
    ObjectValue => Value,
    VariableReference => Value,

    TypeName => Type,
    ListType => Type,
    NonNullType => Type,

    Argument => Other,
    Directive => Other,
    DirectiveLocation => Other,
    EnumValueDefinition => Other,
    FieldDefinition => Other,
    InputValueDefinition => Other,
    ObjectField => Other,
    OperationTypeDefinition => Other,
    SelectionSet => Other,
    VariableDefinition => Other,
}

impl Node {
    pub fn category(&self) -> NodeCategory {
        self.kind().category()
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.meta().location.as_ref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.meta().comments
    }

    pub fn provenance(&self) -> Provenance {
        self.meta().provenance
    }

    pub fn children(&self) -> Vec<Node> {
        self.named_children().into_flattened()
    }

    /// # Panics
    ///
    /// Panics when `children` violates the children contract; see
    /// [`try_with_new_children`](Node::try_with_new_children).
    pub fn with_new_children(&self, children: NodeChildrenContainer) -> Node {
        match self.try_with_new_children(children) {
            Ok(node) => node,
            Err(err) => panic!("children contract violated: {err}"),
        }
    }

    pub fn to_source(&self) -> String {
        let mut printer = SdlPrinter::new();
        self.print_to(&mut printer);
        printer.finish()
    }
}

/// Content equality over whole subtrees: both nodes are
/// [`is_equal_to`](Node::is_equal_to) each other and so are their children,
/// key by key and position by position. Metadata is ignored.
pub fn deep_equal(a: &Node, b: &Node) -> bool {
    if !a.is_equal_to(b) {
        return false;
    }
    let a_children = a.named_children();
    let b_children = b.named_children();
    if !a_children.keys().eq(b_children.keys()) {
        return false;
    }
    a_children.iter().all(|(key, a_nodes)| {
        let b_nodes = b_children.get(key);
        a_nodes.len() == b_nodes.len()
            && a_nodes
                .iter()
                .zip(b_nodes)
                .all(|(a_child, b_child)| deep_equal(a_child, b_child))
    })
}
