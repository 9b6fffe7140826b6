//! Depth-first traversal over an explicit stack.

use crate::ast::Node;
use crate::visitor::Visitor;

/// What a [`Visitor`] callback asks the [`Traverser`] to do next.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraversalControl {
    Continue,

    /// From `enter`: do not descend into the current node (its `leave`
    /// still runs). From `leave`: same as `Continue`.
    Skip,

    /// Stop the whole traversal immediately.
    Abort,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraversalPhase {
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraversalOutcome {
    Completed,
    Aborted,
}

/// Everything a [`Visitor`] callback can see about the node being visited.
///
/// `accumulator` is the caller-supplied value threaded through the whole
/// traversal.
pub struct TraverserContext<'a, R> {
    node: &'a Node,
    parents: &'a [Node],
    key: Option<&'static str>,
    index: Option<usize>,
    phase: TraversalPhase,
    enter_called: bool,
    accumulator: &'a mut R,
}

impl<'a, R> TraverserContext<'a, R> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// The immediate parent, or `None` at the traversal root.
    pub fn parent(&self) -> Option<&'a Node> {
        self.parents.last()
    }

    /// Ancestors from the traversal root down to the immediate parent.
    pub fn parents(&self) -> &'a [Node] {
        self.parents
    }

    /// The key the current node sits under in its parent's
    /// [`named_children`](crate::ast::Node::named_children).
    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    /// Position of the current node within its parent's list for
    /// [`key`](Self::key).
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn phase(&self) -> TraversalPhase {
        self.phase
    }

    /// Whether this traversal calls `enter` as well, so that a `leave`
    /// callback is seeing a node that was already visited once.
    pub fn visited_on_enter(&self) -> bool {
        self.enter_called
    }

    /// Distance from the traversal root (which is at depth 0).
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    pub fn accumulator(&self) -> &R {
        self.accumulator
    }

    pub fn accumulator_mut(&mut self) -> &mut R {
        self.accumulator
    }
}

struct StackEntry {
    node: Node,
    key: Option<&'static str>,
    index: Option<usize>,
    depth: usize,
    phase: TraversalPhase,
}

/// Walks a tree depth-first without recursion, so arbitrarily deep trees
/// cannot overflow the call stack.
#[derive(Clone, Copy, Debug)]
pub struct Traverser {
    call_enter: bool,
    call_leave: bool,
}

impl Traverser {
    /// Calls only `enter`, parents before children.
    pub fn pre_order() -> Self {
        Self {
            call_enter: true,
            call_leave: false,
        }
    }

    /// Calls only `leave`, children before parents.
    pub fn post_order() -> Self {
        Self {
            call_enter: false,
            call_leave: true,
        }
    }

    /// Calls `enter` on the way down and `leave` on the way up.
    pub fn depth_first() -> Self {
        Self {
            call_enter: true,
            call_leave: true,
        }
    }

    pub fn traverse<R>(
        &self,
        root: &Node,
        visitor: &mut impl Visitor<R>,
        accumulator: &mut R,
    ) -> TraversalOutcome {
        self.traverse_all(std::slice::from_ref(root), visitor, accumulator)
    }

    /// Traverses each root in turn, sharing one visitor and accumulator.
    pub fn traverse_all<R>(
        &self,
        roots: &[Node],
        visitor: &mut impl Visitor<R>,
        accumulator: &mut R,
    ) -> TraversalOutcome {
        let mut stack: Vec<StackEntry> = roots
            .iter()
            .rev()
            .map(|root| StackEntry {
                node: root.clone(),
                key: None,
                index: None,
                depth: 0,
                phase: TraversalPhase::Enter,
            })
            .collect();
        let mut parents: Vec<Node> = vec![];

        while let Some(entry) = stack.pop() {
            parents.truncate(entry.depth);
            let mut ctx = TraverserContext {
                node: &entry.node,
                parents: &parents,
                key: entry.key,
                index: entry.index,
                phase: entry.phase,
                enter_called: self.call_enter,
                accumulator: &mut *accumulator,
            };

            match entry.phase {
                TraversalPhase::Enter => {
                    let control =
                        if self.call_enter {
                            visitor.enter(&mut ctx)
                        } else {
                            TraversalControl::Continue
                        };
                    if control == TraversalControl::Abort {
                        return TraversalOutcome::Aborted;
                    }

                    if self.call_leave {
                        stack.push(StackEntry {
                            phase: TraversalPhase::Leave,
                            node: entry.node.clone(),
                            ..entry
                        });
                    }
                    if control == TraversalControl::Skip {
                        continue;
                    }

                    let children = entry.node.named_children();
                    let child_entries: Vec<StackEntry> = children
                        .iter()
                        .flat_map(|(key, nodes)| {
                            nodes.iter().enumerate().map(move |(idx, child)| StackEntry {
                                node: child.clone(),
                                key: Some(key),
                                index: Some(idx),
                                depth: entry.depth + 1,
                                phase: TraversalPhase::Enter,
                            })
                        })
                        .collect();
                    if !child_entries.is_empty() {
                        parents.push(entry.node.clone());
                        stack.extend(child_entries.into_iter().rev());
                    }
                },
                TraversalPhase::Leave => {
                    if visitor.leave(&mut ctx) == TraversalControl::Abort {
                        return TraversalOutcome::Aborted;
                    }
                },
            }
        }
        TraversalOutcome::Completed
    }
}
