use std::sync::Arc;

/// Position of the first character of a concrete syntax node.
///
/// # Indexing Convention
///
/// `line` and `column` are **1-based** (the first character of a document is
/// at line 1, column 1) and `column` counts characters, not bytes.
/// `byte_offset` is 0-based from the start of the document.
///
/// The optional `source_name` (usually a file path) is shared between every
/// position produced for the same document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
    source_name: Option<Arc<str>>,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        column: usize,
        byte_offset: usize,
        source_name: Option<Arc<str>>,
    ) -> Self {
        Self {
            line,
            column,
            byte_offset,
            source_name,
        }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based character column within the line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Name of the source (e.g. a file path) this position points into, if
    /// the producer of the tree knew one.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source_name {
            Some(name) => write!(f, "{name}:{}:{}", self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}
