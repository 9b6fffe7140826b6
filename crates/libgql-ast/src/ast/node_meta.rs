use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Where a node starts in its source document.
///
/// `line` and `column` are 1-based. `source_name` is usually the path of the
/// file the node was converted from.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub source_name: Option<String>,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, source_name: Option<String>) -> Self {
        Self {
            line,
            column,
            source_name,
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.source_name {
            Some(name) => write!(f, "{name}:{}:{}", self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// A `#` comment that preceded a node in its source document.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Comment {
    /// Comment text without the leading `#`.
    pub content: String,
    pub location: Option<SourceLocation>,
}

/// Where a node's definition came from.
///
/// Definitions loaded from a read-only library (e.g. a shared base schema)
/// are tagged so that downstream tooling can refuse to edit or re-emit them.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Provenance {
    #[default]
    Local,
    ReadOnlyLibrary,
}

impl Provenance {
    pub fn is_read_only(&self) -> bool {
        matches!(self, Provenance::ReadOnlyLibrary)
    }
}

/// Metadata carried by every AST node.
///
/// None of this participates in [`is_equal_to`](crate::AstNode::is_equal_to)
/// or [`deep_equal`](crate::deep_equal); it does participate in `PartialEq`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct NodeMeta {
    pub location: Option<SourceLocation>,
    pub comments: Vec<Comment>,
    pub provenance: Provenance,

    /// Free-form string tags attached by tooling, in insertion order.
    pub additional_data: IndexMap<String, String>,
}

impl NodeMeta {
    pub fn at(location: SourceLocation) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }
}
