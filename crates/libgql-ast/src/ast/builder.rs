use std::ops::Deref;
use std::ops::DerefMut;
use std::sync::Arc;

/// A mutable staging copy of a node.
///
/// Fields of the staged node are reached through `Deref`/`DerefMut`;
/// [`build`](Builder::build) freezes it into a shareable `Arc`.
///
/// ```
/// use libgql_ast::ast::Builder;
/// use libgql_ast::ast::TypeName;
///
/// let type_name = Builder::<TypeName>::new()
///     .with(|t| t.name = "User".to_string())
///     .build();
/// assert_eq!(type_name.name, "User");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Builder<T> {
    staged: T,
}

impl<T: Default> Builder<T> {
    /// Starts from the node kind's defaults: empty lists, no description,
    /// no metadata.
    pub fn new() -> Self {
        Self {
            staged: T::default(),
        }
    }
}

impl<T: Clone> Builder<T> {
    pub fn from_node(node: &T) -> Self {
        Self {
            staged: node.clone(),
        }
    }
}

impl<T> Builder<T> {
    pub fn with(mut self, f: impl FnOnce(&mut T)) -> Self {
        f(&mut self.staged);
        self
    }

    pub fn build(self) -> Arc<T> {
        Arc::new(self.staged)
    }

    pub fn into_inner(self) -> T {
        self.staged
    }
}

impl<T> Deref for Builder<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.staged
    }
}

impl<T> DerefMut for Builder<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.staged
    }
}
