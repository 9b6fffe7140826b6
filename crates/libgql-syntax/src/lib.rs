//! Concrete syntax trees for GraphQL documents.
//!
//! This crate provides the [`ConcreteSyntaxNode`] view that AST conversion
//! consumes, an owned [`SyntaxNode`] implementation of it, and a tolerant
//! lexer/parser ([`parse_document`]) that always produces a tree, even for
//! half-written documents.

mod lexer;
mod parser;
mod source_position;
mod syntax_error;
mod syntax_kind;
mod syntax_node;
mod token;

pub use parser::parse_document;
pub use parser::ParseOutput;
pub use source_position::SourcePosition;
pub use syntax_error::SyntaxError;
pub use syntax_kind::SyntaxKind;
pub use syntax_node::ConcreteSyntaxNode;
pub use syntax_node::SyntaxNode;

#[cfg(test)]
mod tests;
