use crate::ast::Builder;
use crate::ast::ChildrenContractError;
use crate::ast::Comment;
use crate::ast::Node;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::Provenance;
use crate::ast::SourceLocation;
use crate::printer::SdlPrinter;
use indexmap::IndexMap;
use std::sync::Arc;

/// Trait implemented by all AST node types.
///
/// Node types implement the required methods via `#[inherent] impl AstNode`
/// so they are callable without importing this trait; the provided methods
/// (metadata accessors, [`children`](AstNode::children),
/// [`deep_copy`](AstNode::deep_copy), [`transform`](AstNode::transform),
/// [`to_source`](AstNode::to_source)) need the trait in scope.
///
/// # Children contract
///
/// [`named_children`](AstNode::named_children) groups a node's children under
/// stable keys (see [`child_keys`](crate::ast::child_keys)) and
/// [`try_with_new_children`](AstNode::try_with_new_children) rebuilds the
/// node from such a container, keeping every scalar field. For any node `n`,
/// `n.with_new_children(n.named_children()) == n`.
pub trait AstNode: Clone + Send + Sync + 'static {
    fn meta(&self) -> &NodeMeta;

    fn kind(&self) -> NodeKind;

    fn named_children(&self) -> NodeChildrenContainer;

    /// Rebuilds this node with the given children in place of its own.
    ///
    /// Fails for leaf nodes given any children, for keys this node does not
    /// have, for children of the wrong kind, and when a required single
    /// child is missing.
    fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError>;

    /// Compares this node's own scalar content (names, values, operation
    /// kind, definition form, description...) but never its children or
    /// metadata. See [`deep_equal`](crate::deep_equal) for whole subtrees.
    fn is_equal_to(&self, other: &Self) -> bool;

    /// Writes this node as GraphQL source text.
    fn print_to(&self, printer: &mut SdlPrinter);

    fn location(&self) -> Option<&SourceLocation> {
        self.meta().location.as_ref()
    }

    fn comments(&self) -> &[Comment] {
        &self.meta().comments
    }

    fn provenance(&self) -> Provenance {
        self.meta().provenance
    }

    fn additional_data(&self) -> &IndexMap<String, String> {
        &self.meta().additional_data
    }

    /// All children, in [`named_children`](AstNode::named_children) key
    /// order.
    fn children(&self) -> Vec<Node> {
        self.named_children().into_flattened()
    }

    /// Like [`try_with_new_children`](AstNode::try_with_new_children), but
    /// treats a contract violation as a bug.
    ///
    /// # Panics
    ///
    /// Panics with the [`ChildrenContractError`] when the container violates
    /// the children contract.
    fn with_new_children(&self, children: NodeChildrenContainer) -> Self {
        match self.try_with_new_children(children) {
            Ok(node) => node,
            Err(err) => panic!("children contract violated: {err}"),
        }
    }

    /// A copy of this subtree that shares no allocations with the original.
    fn deep_copy(&self) -> Self {
        let children = self.named_children().map_nodes(|child| child.deep_copy());
        self.with_new_children(children)
    }

    /// Copy-and-mutate: stages a copy of this node in a [`Builder`], hands it
    /// to `f`, then freezes the result.
    fn transform(&self, f: impl FnOnce(&mut Builder<Self>)) -> Arc<Self> {
        let mut builder = Builder::from_node(self);
        f(&mut builder);
        builder.build()
    }

    fn to_source(&self) -> String {
        let mut printer = SdlPrinter::new();
        self.print_to(&mut printer);
        printer.finish()
    }
}
