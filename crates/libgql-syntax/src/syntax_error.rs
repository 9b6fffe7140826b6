use crate::SourcePosition;

/// A problem the tolerant parser recovered from.
///
/// The parser never stops at these: the offending tokens are wrapped in an
/// [`SyntaxKind::Error`](crate::SyntaxKind::Error) node (or the missing part
/// is simply absent from the tree) and parsing continues.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message} (at {position})")]
pub struct SyntaxError {
    pub message: String,
    pub position: SourcePosition,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}
