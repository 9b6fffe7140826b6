//! Persistent rewrites of immutable trees.
//!
//! A transform visits nodes parents-first and lets a callback keep, replace
//! or delete each one. Ancestors of every changed node are rebuilt through
//! [`try_with_new_children`](crate::ast::Node::try_with_new_children);
//! untouched subtrees are shared with the input tree.

use crate::ast::ChildrenContractError;
use crate::ast::Node;
use crate::ast::NodeChildrenContainer;

/// What a transform callback wants done with the node it was shown.
#[derive(Clone, Debug)]
pub enum TransformAction {
    /// Keep the node and visit its children.
    Continue,

    /// Keep the node and its whole subtree as they are.
    Skip,

    /// Put this node in place of the current one, then visit the
    /// replacement's children.
    Replace(Node),

    /// Remove the node from its parent's child list.
    Delete,

    /// Stop visiting. Changes made so far are kept.
    Abort,
}

/// The node a transform callback is deciding about, and where it sits.
pub struct TransformContext<'a> {
    pub(crate) node: &'a Node,
    pub(crate) parents: &'a [Node],
    pub(crate) key: Option<&'static str>,
    pub(crate) index: Option<usize>,
}

impl<'a> TransformContext<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// The parent as rebuilt so far (after any replacement of the parent
    /// itself), or `None` at the root.
    pub fn parent(&self) -> Option<&'a Node> {
        self.parents.last()
    }

    pub fn parents(&self) -> &'a [Node] {
        self.parents
    }

    pub fn key(&self) -> Option<&'static str> {
        self.key
    }

    /// Position within the parent's list for [`key`](Self::key), as it was
    /// before any sibling was deleted.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn depth(&self) -> usize {
        self.parents.len()
    }
}

/// Result of transforming one subtree.
pub(crate) enum SubtreeOutcome {
    Unchanged,
    Changed(Node),
    Deleted,
}

/// Rebuilds `parent` from its transformed children, or reports it unchanged
/// when no child changed.
pub(crate) fn rebuild_parent(
    parent: Node,
    parent_changed: bool,
    original_children: &NodeChildrenContainer,
    outcomes: Vec<(&'static str, Vec<SubtreeOutcome>)>,
) -> Result<SubtreeOutcome, ChildrenContractError> {
    let any_child_changed = outcomes.iter().any(|(_, child_outcomes)| {
        child_outcomes
            .iter()
            .any(|outcome| !matches!(outcome, SubtreeOutcome::Unchanged))
    });
    if !any_child_changed {
        return Ok(if parent_changed {
            SubtreeOutcome::Changed(parent)
        } else {
            SubtreeOutcome::Unchanged
        });
    }

    let mut new_children = NodeChildrenContainer::new();
    for (key, child_outcomes) in outcomes {
        let originals = original_children.get(key);
        let nodes = child_outcomes
            .into_iter()
            .zip(originals)
            .filter_map(|(outcome, original)| match outcome {
                SubtreeOutcome::Unchanged => Some(original.clone()),
                SubtreeOutcome::Changed(node) => Some(node),
                SubtreeOutcome::Deleted => None,
            })
            .collect();
        new_children.set(key, nodes);
    }
    Ok(SubtreeOutcome::Changed(parent.try_with_new_children(new_children)?))
}

/// Sequential tree transformer.
///
/// ```
/// use libgql_ast::ast::Node;
/// use libgql_ast::TransformAction;
/// use libgql_ast::TreeTransformer;
///
/// let doc = libgql_ast::parse_and_convert("type A { x: Int y: Int }", None);
/// let root = Node::from(doc);
/// let out = TreeTransformer::new(|ctx| match ctx.node() {
///     Node::FieldDefinition(field) if field.name == "y" => TransformAction::Delete,
///     _ => TransformAction::Continue,
/// })
/// .transform(&root)
/// .unwrap();
/// assert_eq!(out.unwrap().to_source(), "type A {\n  x: Int\n}\n");
/// ```
pub struct TreeTransformer<F> {
    callback: F,
    aborted: bool,
}

impl<F> TreeTransformer<F>
where
    F: FnMut(&TransformContext<'_>) -> TransformAction,
{
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            aborted: false,
        }
    }

    /// Transforms the tree under `root`.
    ///
    /// Returns `Ok(None)` when the root itself was deleted, and an error
    /// when a rebuilt ancestor would violate its children contract (for
    /// instance after deleting a required child).
    pub fn transform(
        &mut self,
        root: &Node,
    ) -> Result<Option<Node>, ChildrenContractError> {
        self.aborted = false;
        let mut parents = vec![];
        Ok(match self.visit(root, None, None, &mut parents)? {
            SubtreeOutcome::Unchanged => Some(root.clone()),
            SubtreeOutcome::Changed(node) => Some(node),
            SubtreeOutcome::Deleted => None,
        })
    }

    /// Whether the last [`transform`](Self::transform) was stopped by
    /// [`TransformAction::Abort`].
    pub fn was_aborted(&self) -> bool {
        self.aborted
    }

    fn visit(
        &mut self,
        node: &Node,
        key: Option<&'static str>,
        index: Option<usize>,
        parents: &mut Vec<Node>,
    ) -> Result<SubtreeOutcome, ChildrenContractError> {
        let action = (self.callback)(&TransformContext {
            node,
            parents: parents.as_slice(),
            key,
            index,
        });
        let (current, changed) = match action {
            TransformAction::Continue => (node.clone(), false),
            TransformAction::Replace(replacement) => (replacement, true),
            TransformAction::Skip => return Ok(SubtreeOutcome::Unchanged),
            TransformAction::Delete => return Ok(SubtreeOutcome::Deleted),
            TransformAction::Abort => {
                self.aborted = true;
                return Ok(SubtreeOutcome::Unchanged);
            },
        };

        let children = current.named_children();
        let mut outcomes = Vec::with_capacity(children.iter().count());
        parents.push(current.clone());
        for (child_key, nodes) in children.iter() {
            let mut child_outcomes = Vec::with_capacity(nodes.len());
            for (child_index, child) in nodes.iter().enumerate() {
                if self.aborted {
                    child_outcomes.push(SubtreeOutcome::Unchanged);
                    continue;
                }
                child_outcomes.push(self.visit(
                    child,
                    Some(child_key),
                    Some(child_index),
                    parents,
                )?);
            }
            outcomes.push((child_key, child_outcomes));
        }
        parents.pop();

        rebuild_parent(current, changed, &children, outcomes)
    }
}
