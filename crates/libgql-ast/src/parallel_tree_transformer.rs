use crate::ast::ChildrenContractError;
use crate::ast::Node;
use crate::tree_transformer::rebuild_parent;
use crate::tree_transformer::SubtreeOutcome;
use crate::tree_transformer::TransformAction;
use crate::tree_transformer::TransformContext;
use rayon::prelude::*;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// A [`TreeTransformer`](crate::TreeTransformer) that processes sibling
/// subtrees on the `rayon` thread pool.
///
/// Produces the same tree as the sequential transformer for any callback
/// whose decisions do not depend on visiting order. Sibling callbacks may
/// run in any order and concurrently.
pub struct ParallelTreeTransformer<F> {
    callback: F,
    aborted: AtomicBool,
}

impl<F> ParallelTreeTransformer<F>
where
    F: Fn(&TransformContext<'_>) -> TransformAction + Sync,
{
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            aborted: AtomicBool::new(false),
        }
    }

    pub fn transform(
        &self,
        root: &Node,
    ) -> Result<Option<Node>, ChildrenContractError> {
        self.aborted.store(false, Ordering::SeqCst);
        Ok(match self.visit(root, None, None, &[])? {
            SubtreeOutcome::Unchanged => Some(root.clone()),
            SubtreeOutcome::Changed(node) => Some(node),
            SubtreeOutcome::Deleted => None,
        })
    }

    pub fn was_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    fn visit(
        &self,
        node: &Node,
        key: Option<&'static str>,
        index: Option<usize>,
        parents: &[Node],
    ) -> Result<SubtreeOutcome, ChildrenContractError> {
        let action = (self.callback)(&TransformContext {
            node,
            parents,
            key,
            index,
        });
        let (current, changed) = match action {
            TransformAction::Continue => (node.clone(), false),
            TransformAction::Replace(replacement) => (replacement, true),
            TransformAction::Skip => return Ok(SubtreeOutcome::Unchanged),
            TransformAction::Delete => return Ok(SubtreeOutcome::Deleted),
            TransformAction::Abort => {
                self.aborted.store(true, Ordering::SeqCst);
                return Ok(SubtreeOutcome::Unchanged);
            },
        };

        let children = current.named_children();
        let mut child_parents = parents.to_vec();
        child_parents.push(current.clone());

        let outcomes = children
            .iter()
            .map(|(child_key, nodes)| {
                let child_outcomes = nodes
                    .par_iter()
                    .enumerate()
                    .map(|(child_index, child)| {
                        if self.aborted.load(Ordering::SeqCst) {
                            return Ok(SubtreeOutcome::Unchanged);
                        }
                        self.visit(
                            child,
                            Some(child_key),
                            Some(child_index),
                            &child_parents,
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((child_key, child_outcomes))
            })
            .collect::<Result<Vec<_>, ChildrenContractError>>()?;

        rebuild_parent(current, changed, &children, outcomes)
    }
}
