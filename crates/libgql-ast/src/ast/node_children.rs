use crate::ast::FromNode;
use crate::ast::Node;
use crate::ast::NodeKind;
use indexmap::IndexMap;

/// Stable keys under which nodes expose their children.
pub mod child_keys {
    pub const ARGUMENTS: &str = "arguments";
    pub const DEFAULT_VALUE: &str = "defaultValue";
    pub const DEFINITIONS: &str = "definitions";
    pub const DIRECTIVES: &str = "directives";
    pub const FIELDS: &str = "fields";
    pub const IMPLEMENTS: &str = "implements";
    pub const LOCATIONS: &str = "locations";
    pub const MEMBERS: &str = "members";
    pub const OPERATION_TYPES: &str = "operationTypes";
    pub const SELECTION_SET: &str = "selectionSet";
    pub const SELECTIONS: &str = "selections";
    pub const TYPE: &str = "type";
    pub const TYPE_CONDITION: &str = "typeCondition";
    pub const TYPE_NAME: &str = "typeName";
    pub const VALUE: &str = "value";
    pub const VALUES: &str = "values";
    pub const VARIABLE_DEFINITIONS: &str = "variableDefinitions";
}

/// A violation of the contract of
/// [`try_with_new_children`](crate::AstNode::try_with_new_children).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ChildrenContractError {
    #[error("{owner:?} is a leaf node and cannot take `{key}` children")]
    LeafNodeChildren {
        owner: NodeKind,
        key: &'static str,
    },

    #[error("{owner:?} has no `{key}` children")]
    UnknownKey {
        owner: NodeKind,
        key: &'static str,
    },

    #[error("{owner:?} cannot hold a {found:?} under `{key}`")]
    WrongChildKind {
        owner: NodeKind,
        key: &'static str,
        found: NodeKind,
    },

    #[error("{owner:?} requires exactly one `{key}` child, found {count}")]
    WrongChildCount {
        owner: NodeKind,
        key: &'static str,
        count: usize,
    },

    #[error("a NonNullType cannot wrap another NonNullType")]
    NestedNonNull,
}

/// A node's children grouped under [`child_keys`], in a stable key order.
///
/// Produced by [`named_children`](crate::AstNode::named_children) and
/// consumed by [`with_new_children`](crate::AstNode::with_new_children).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeChildrenContainer {
    children: IndexMap<&'static str, Vec<Node>>,
}

impl NodeChildrenContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the list of children under `key`.
    pub fn with<N: Into<Node>>(
        mut self,
        key: &'static str,
        nodes: impl IntoIterator<Item = N>,
    ) -> Self {
        self.set(key, nodes.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_optional<N: Into<Node>>(
        self,
        key: &'static str,
        node: Option<N>,
    ) -> Self {
        self.with(key, node)
    }

    pub fn with_single<N: Into<Node>>(self, key: &'static str, node: N) -> Self {
        self.with(key, [node])
    }

    pub fn set(&mut self, key: &'static str, nodes: Vec<Node>) {
        self.children.insert(key, nodes);
    }

    /// Children under `key`; empty when the key is absent.
    pub fn get(&self, key: &str) -> &[Node] {
        self.children.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.children.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Node])> {
        self.children
            .iter()
            .map(|(key, nodes)| (*key, nodes.as_slice()))
    }

    /// Total number of children across all keys.
    pub fn len(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All children in key order, then in list order.
    pub fn into_flattened(self) -> Vec<Node> {
        self.children.into_values().flatten().collect()
    }

    pub fn map_nodes(self, mut f: impl FnMut(Node) -> Node) -> Self {
        Self {
            children: self
                .children
                .into_iter()
                .map(|(key, nodes)| (key, nodes.into_iter().map(&mut f).collect()))
                .collect(),
        }
    }

    pub(crate) fn into_reader(
        self,
        owner: NodeKind,
        allowed_keys: &[&'static str],
    ) -> Result<ChildrenReader, ChildrenContractError> {
        if allowed_keys.is_empty() {
            if let Some((key, _)) =
                self.children.iter().find(|(_, nodes)| !nodes.is_empty()) {
                return Err(ChildrenContractError::LeafNodeChildren {
                    owner,
                    key: *key,
                });
            }
        } else if let Some(key) =
            self.children.keys().copied().find(|key| !allowed_keys.contains(key)) {
            return Err(ChildrenContractError::UnknownKey { owner, key });
        }
        Ok(ChildrenReader {
            owner,
            children: self.children,
        })
    }
}

/// Pulls typed children back out of a [`NodeChildrenContainer`] while
/// rebuilding a node.
pub(crate) struct ChildrenReader {
    owner: NodeKind,
    children: IndexMap<&'static str, Vec<Node>>,
}

impl ChildrenReader {
    fn convert<T: FromNode>(
        &self,
        key: &'static str,
        node: Node,
    ) -> Result<T, ChildrenContractError> {
        T::from_node(node).map_err(|node| ChildrenContractError::WrongChildKind {
            owner: self.owner,
            key,
            found: node.kind(),
        })
    }

    pub fn list<T: FromNode>(
        &mut self,
        key: &'static str,
    ) -> Result<Vec<T>, ChildrenContractError> {
        self.children
            .shift_remove(key)
            .unwrap_or_default()
            .into_iter()
            .map(|node| self.convert(key, node))
            .collect()
    }

    pub fn optional<T: FromNode>(
        &mut self,
        key: &'static str,
    ) -> Result<Option<T>, ChildrenContractError> {
        let mut nodes = self.children.shift_remove(key).unwrap_or_default();
        match nodes.len() {
            0 => Ok(None),
            1 => match nodes.pop() {
                Some(node) => self.convert(key, node).map(Some),
                None => Ok(None),
            },
            count => Err(ChildrenContractError::WrongChildCount {
                owner: self.owner,
                key,
                count,
            }),
        }
    }

    pub fn required<T: FromNode>(
        &mut self,
        key: &'static str,
    ) -> Result<T, ChildrenContractError> {
        let count = self.children.get(key).map_or(0, Vec::len);
        match self.optional(key)? {
            Some(node) => Ok(node),
            None => Err(ChildrenContractError::WrongChildCount {
                owner: self.owner,
                key,
                count,
            }),
        }
    }
}
