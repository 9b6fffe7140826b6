use crate::ast::SourceLocation;
use serde::Deserialize;
use serde::Serialize;

/// The documentation string attached to a type-system definition.
///
/// `content` is the already-unescaped string value; `block` records whether
/// it was written as a `"""block string"""`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Description {
    pub content: String,
    pub block: bool,
    pub location: Option<SourceLocation>,
}

impl Description {
    pub fn new(content: impl Into<String>, block: bool) -> Self {
        Self {
            content: content.into(),
            block,
            location: None,
        }
    }
}

/// Compares description text and style, ignoring where they were written.
pub(crate) fn same_description(a: &Option<Description>, b: &Option<Description>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.content == b.content && a.block == b.block,
        (None, None) => true,
        _ => false,
    }
}
