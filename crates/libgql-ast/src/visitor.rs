//! Callback interfaces for [`Traverser`](crate::Traverser).
//!
//! [`Visitor`] sees every node through one pair of callbacks;
//! [`NodeVisitor`] instead receives one call per node category and is
//! dispatched with [`Node::accept`] (or adapted into a `Visitor` with
//! [`CategoryVisitor`]).

use crate::ast::Node;
use crate::ast::NodeCategory;
use crate::traverser::TraversalControl;
use crate::traverser::TraverserContext;

/// Receives every node a [`Traverser`](crate::Traverser) walks over.
///
/// `R` is the accumulator type threaded through the traversal. Both
/// callbacks default to [`TraversalControl::Continue`].
pub trait Visitor<R> {
    fn enter(&mut self, _ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        TraversalControl::Continue
    }

    fn leave(&mut self, _ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        TraversalControl::Continue
    }
}

/// A visitor with one callback per [`NodeCategory`].
///
/// Every callback defaults to [`visit_node`](NodeVisitor::visit_node), except
/// [`visit_type_definition`](NodeVisitor::visit_type_definition) which
/// falls back to [`visit_definition`](NodeVisitor::visit_definition) since a
/// type definition is also a definition.
pub trait NodeVisitor<R> {
    fn visit_node(&mut self, _ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        TraversalControl::Continue
    }

    fn visit_definition(&mut self, ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        self.visit_node(ctx)
    }

    fn visit_type_definition(
        &mut self,
        ctx: &mut TraverserContext<'_, R>,
    ) -> TraversalControl {
        self.visit_definition(ctx)
    }

    fn visit_selection(&mut self, ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        self.visit_node(ctx)
    }

    fn visit_value(&mut self, ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        self.visit_node(ctx)
    }

    fn visit_type(&mut self, ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        self.visit_node(ctx)
    }
}

impl Node {
    /// Double dispatch: calls the `visitor` method matching this node's
    /// [`NodeCategory`].
    ///
    /// `ctx` must describe this node.
    pub fn accept<R>(
        &self,
        ctx: &mut TraverserContext<'_, R>,
        visitor: &mut (impl NodeVisitor<R> + ?Sized),
    ) -> TraversalControl {
        match self.category() {
            NodeCategory::Definition => visitor.visit_definition(ctx),
            NodeCategory::TypeDefinition => visitor.visit_type_definition(ctx),
            NodeCategory::Selection => visitor.visit_selection(ctx),
            NodeCategory::Value => visitor.visit_value(ctx),
            NodeCategory::Type => visitor.visit_type(ctx),
            NodeCategory::Other => visitor.visit_node(ctx),
        }
    }
}

/// Adapts a [`NodeVisitor`] so a [`Traverser`](crate::Traverser) can drive
/// it. The category callbacks run when a node is entered, or when it is left
/// if the traversal only calls `leave` (post-order).
pub struct CategoryVisitor<V>(pub V);

impl<V> CategoryVisitor<V> {
    pub fn into_inner(self) -> V {
        self.0
    }
}

impl<R, V: NodeVisitor<R>> Visitor<R> for CategoryVisitor<V> {
    fn enter(&mut self, ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        let node = ctx.node();
        node.accept(ctx, &mut self.0)
    }

    fn leave(&mut self, ctx: &mut TraverserContext<'_, R>) -> TraversalControl {
        if ctx.visited_on_enter() {
            return TraversalControl::Continue;
        }
        let node = ctx.node();
        node.accept(ctx, &mut self.0)
    }
}
