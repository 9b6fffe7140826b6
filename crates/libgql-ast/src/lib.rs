//! The typed, immutable GraphQL AST.
//!
//! Nodes are plain structs behind [`Arc`](std::sync::Arc)s (see [`ast`]),
//! uniformly reachable through the [`Node`] sum type. On top of that model
//! this crate provides:
//!
//! * the [`AstNode`] children/rebuild contract and [`Builder`](ast::Builder)s
//!   for copy-and-mutate edits,
//! * explicit-stack traversal ([`Traverser`]) driving [`Visitor`]s and
//!   category-dispatched [`NodeVisitor`]s,
//! * persistent rewrites ([`TreeTransformer`] and its `rayon`-backed
//!   [`ParallelTreeTransformer`]),
//! * tolerant conversion from concrete syntax trees ([`convert_document`]),
//! * an SDL [`printer`].

pub mod ast;
mod cst_to_ast;
mod parallel_tree_transformer;
pub mod printer;
mod traverser;
mod tree_transformer;
mod visitor;

pub use ast::deep_equal;
pub use ast::AstNode;
pub use ast::Node;
pub use ast::NodeCategory;
pub use ast::NodeKind;
pub use cst_to_ast::convert_document;
pub use cst_to_ast::ConvertOptions;
pub use cst_to_ast::StringLiteralError;
pub use parallel_tree_transformer::ParallelTreeTransformer;
pub use printer::print_document;
pub use printer::print_node;
pub use traverser::TraversalControl;
pub use traverser::TraversalOutcome;
pub use traverser::TraversalPhase;
pub use traverser::Traverser;
pub use traverser::TraverserContext;
pub use tree_transformer::TransformAction;
pub use tree_transformer::TransformContext;
pub use tree_transformer::TreeTransformer;
pub use visitor::CategoryVisitor;
pub use visitor::NodeVisitor;
pub use visitor::Visitor;

/// Parses `source` with [`libgql_syntax::parse_document`] and converts the
/// resulting tree with default [`ConvertOptions`].
///
/// Syntax errors are not reported; whatever could be recovered is converted.
/// Callers that need the errors should parse and convert separately.
pub fn parse_and_convert(source: &str, source_name: Option<&str>) -> ast::Document {
    let parsed = libgql_syntax::parse_document(source, source_name);
    convert_document(&parsed.tree, &ConvertOptions::default())
}

#[cfg(test)]
mod tests;
