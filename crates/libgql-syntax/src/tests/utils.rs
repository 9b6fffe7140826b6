use crate::parse_document;
use crate::SyntaxKind;
use crate::SyntaxNode;

/// Parses `source`, asserting that the parser reported no errors.
pub fn parse_clean(source: &str) -> SyntaxNode {
    let output = parse_document(source, None);
    assert!(
        output.errors.is_empty(),
        "unexpected syntax errors: {:?}",
        output.errors,
    );
    output.tree
}

/// Returns the direct children of `node` that are not comments or
/// punctuation, i.e. the ones carrying meaning.
pub fn significant_children(node: &SyntaxNode) -> Vec<&SyntaxNode> {
    node.child_nodes()
        .iter()
        .filter(|child| {
            !matches!(child.kind(), SyntaxKind::Comment | SyntaxKind::Punctuation)
        })
        .collect()
}

/// Kinds of the direct children of `node`, comments included.
pub fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.child_nodes().iter().map(|child| child.kind()).collect()
}

/// Finds the first node of `kind` in a pre-order walk of `node`.
pub fn find_first(node: &SyntaxNode, kind: SyntaxKind) -> Option<&SyntaxNode> {
    if node.kind() == kind {
        return Some(node);
    }
    node.child_nodes()
        .iter()
        .find_map(|child| find_first(child, kind))
}
