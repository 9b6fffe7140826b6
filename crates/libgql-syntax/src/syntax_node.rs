use crate::SourcePosition;
use crate::SyntaxKind;
use std::borrow::Cow;

/// The view of a concrete syntax tree that AST conversion consumes.
///
/// Any parser (or editor integration) can hand its trees to the converter by
/// implementing this trait; nothing else about the tree is assumed.
pub trait ConcreteSyntaxNode {
    /// The node's kind tag.
    fn kind(&self) -> SyntaxKind;

    /// Child nodes in source order.
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Raw source text. For leaves this is the token text exactly as
    /// written (string literals keep their quotes).
    fn text(&self) -> Cow<'_, str>;

    /// Where the node starts, when known.
    fn location(&self) -> Option<&SourcePosition>;
}

/// An owned concrete syntax tree node.
///
/// Leaves carry their token text; composites carry children. A composite's
/// position is the position of its first child.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    text: Option<String>,
    children: Vec<SyntaxNode>,
    position: Option<SourcePosition>,
}

impl SyntaxNode {
    /// Creates a leaf node holding `text`.
    pub fn token(
        kind: SyntaxKind,
        text: impl Into<String>,
        position: Option<SourcePosition>,
    ) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            children: vec![],
            position,
        }
    }

    /// Creates a composite node; its position is taken from the first
    /// non-comment child that has one.
    pub fn composite(kind: SyntaxKind, children: Vec<SyntaxNode>) -> Self {
        let position = children
            .iter()
            .filter(|child| child.kind != SyntaxKind::Comment)
            .find_map(|child| child.position.clone())
            .or_else(|| children.iter().find_map(|child| child.position.clone()));
        Self {
            kind,
            text: None,
            children,
            position,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn child_nodes(&self) -> &[SyntaxNode] {
        &self.children
    }

    pub fn position(&self) -> Option<&SourcePosition> {
        self.position.as_ref()
    }

    /// Finds the first direct child of the given kind.
    pub fn first_child_of_kind(&self, kind: SyntaxKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|child| child.kind == kind)
    }

    /// Collects the token text of this subtree, separating tokens with a
    /// single space. Comments are left out.
    pub fn joined_text(&self) -> String {
        let mut sink = String::new();
        self.append_joined_text(&mut sink);
        sink
    }

    fn append_joined_text(&self, sink: &mut String) {
        if self.kind == SyntaxKind::Comment {
            return;
        }
        if let Some(text) = &self.text {
            if !sink.is_empty() {
                sink.push(' ');
            }
            sink.push_str(text);
        }
        for child in &self.children {
            child.append_joined_text(sink);
        }
    }
}

impl ConcreteSyntaxNode for SyntaxNode {
    fn kind(&self) -> SyntaxKind {
        self.kind
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    fn text(&self) -> Cow<'_, str> {
        match &self.text {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Owned(self.joined_text()),
        }
    }

    fn location(&self) -> Option<&SourcePosition> {
        self.position.as_ref()
    }
}
