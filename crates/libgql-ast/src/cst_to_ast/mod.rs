//! Conversion of concrete syntax trees into [`Document`]s.
//!
//! Conversion is tolerant: a construct that is missing a required part (a
//! definition without a name, a field definition without a type, a numeric
//! literal that is not valid GraphQL, ...) is left out of the result and
//! everything around it is still converted. Nothing here ever fails.

mod executable;
mod string_literal;
mod type_system;
mod values;

pub use string_literal::StringLiteralError;

use crate::ast::Comment;
use crate::ast::Definition;
use crate::ast::DefinitionForm;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::NodeMeta;
use crate::ast::Provenance;
use crate::ast::SourceLocation;
use crate::ast::TypeDefinition;
use libgql_syntax::ConcreteSyntaxNode;
use libgql_syntax::SyntaxKind;
use std::sync::Arc;
use string_literal::decode_string_literal;

/// Options for [`convert_document`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvertOptions {
    /// Stamped on every converted node.
    pub provenance: Provenance,

    /// Overrides the source name carried by the syntax tree's positions.
    pub source_name: Option<String>,
}

impl ConvertOptions {
    /// Options for converting a read-only library document.
    pub fn library() -> Self {
        Self {
            provenance: Provenance::ReadOnlyLibrary,
            source_name: None,
        }
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }
}

/// Converts the concrete syntax tree rooted at `root` into a [`Document`].
///
/// Top-level definitions are converted in source order; `Error` nodes and
/// malformed definitions are skipped.
pub fn convert_document<N: ConcreteSyntaxNode>(
    root: &N,
    options: &ConvertOptions,
) -> Document {
    let converter = Converter { options };
    let definitions = root
        .children()
        .filter_map(|child| converter.definition(child))
        .collect();
    Document {
        meta: converter.meta(root),
        definitions,
    }
}

pub(crate) struct Converter<'a> {
    options: &'a ConvertOptions,
}

impl Converter<'_> {
    fn definition<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Definition> {
        use DefinitionForm::Base;
        use DefinitionForm::Extension;

        let definition = match node.kind() {
            SyntaxKind::OperationDefinition => {
                Definition::Operation(self.operation_definition(node)?)
            },
            SyntaxKind::FragmentDefinition => {
                Definition::Fragment(self.fragment_definition(node)?)
            },
            SyntaxKind::SchemaDefinition => {
                Definition::Schema(self.schema_definition(node, Base)?)
            },
            SyntaxKind::SchemaExtension => {
                Definition::Schema(self.schema_definition(node, Extension)?)
            },
            SyntaxKind::DirectiveDefinition => {
                Definition::Directive(self.directive_definition(node)?)
            },
            SyntaxKind::ObjectTypeDefinition => TypeDefinition::Object(
                self.object_type_definition(node, Base)?,
            ).into(),
            SyntaxKind::ObjectTypeExtension => TypeDefinition::Object(
                self.object_type_definition(node, Extension)?,
            ).into(),
            SyntaxKind::InterfaceTypeDefinition => TypeDefinition::Interface(
                self.interface_type_definition(node, Base)?,
            ).into(),
            SyntaxKind::InterfaceTypeExtension => TypeDefinition::Interface(
                self.interface_type_definition(node, Extension)?,
            ).into(),
            SyntaxKind::UnionTypeDefinition => TypeDefinition::Union(
                self.union_type_definition(node, Base)?,
            ).into(),
            SyntaxKind::UnionTypeExtension => TypeDefinition::Union(
                self.union_type_definition(node, Extension)?,
            ).into(),
            SyntaxKind::EnumTypeDefinition => TypeDefinition::Enum(
                self.enum_type_definition(node, Base)?,
            ).into(),
            SyntaxKind::EnumTypeExtension => TypeDefinition::Enum(
                self.enum_type_definition(node, Extension)?,
            ).into(),
            SyntaxKind::ScalarTypeDefinition => TypeDefinition::Scalar(
                self.scalar_type_definition(node, Base)?,
            ).into(),
            SyntaxKind::ScalarTypeExtension => TypeDefinition::Scalar(
                self.scalar_type_definition(node, Extension)?,
            ).into(),
            SyntaxKind::InputObjectTypeDefinition => TypeDefinition::InputObject(
                self.input_object_type_definition(node, Base)?,
            ).into(),
            SyntaxKind::InputObjectTypeExtension => TypeDefinition::InputObject(
                self.input_object_type_definition(node, Extension)?,
            ).into(),
            SyntaxKind::Comment | SyntaxKind::Error => return None,
            other => {
                log::trace!("skipping unexpected top-level {other:?} node");
                return None;
            },
        };
        Some(definition)
    }

    // =========================================================================
    // Metadata
    // =========================================================================

    pub(crate) fn location<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<SourceLocation> {
        let position = node.location()?;
        let source_name = self
            .options
            .source_name
            .clone()
            .or_else(|| position.source_name().map(str::to_string));
        Some(SourceLocation::new(position.line(), position.column(), source_name))
    }

    pub(crate) fn meta<N: ConcreteSyntaxNode>(&self, node: &N) -> NodeMeta {
        NodeMeta {
            location: self.location(node),
            comments: self.leading_comments(node),
            provenance: self.options.provenance,
            additional_data: Default::default(),
        }
    }

    /// Comment children that precede the node's first significant child.
    /// Comments written before a description count as well.
    fn leading_comments<N: ConcreteSyntaxNode>(&self, node: &N) -> Vec<Comment> {
        let mut comments = vec![];
        for child in node.children() {
            match child.kind() {
                SyntaxKind::Comment => comments.push(self.comment(child)),
                SyntaxKind::Description => comments.extend(
                    child
                        .children()
                        .take_while(|grandchild| grandchild.kind() == SyntaxKind::Comment)
                        .map(|comment| self.comment(comment)),
                ),
                _ => break,
            }
        }
        comments
    }

    fn comment<N: ConcreteSyntaxNode>(&self, node: &N) -> Comment {
        let text = node.text();
        Comment {
            content: text.strip_prefix('#').unwrap_or(&text).to_string(),
            location: self.location(node),
        }
    }

    // =========================================================================
    // Shared pieces
    // =========================================================================

    /// The text of the node's first direct `Name` child, if it is non-empty.
    pub(crate) fn name<N: ConcreteSyntaxNode>(node: &N) -> Option<String> {
        let name = child_of_kind(node, SyntaxKind::Name)?.text().into_owned();
        (!name.is_empty()).then_some(name)
    }

    /// Like [`name`](Self::name), but logs why `node` is being dropped when
    /// the name is missing.
    pub(crate) fn required_name<N: ConcreteSyntaxNode>(node: &N) -> Option<String> {
        let name = Self::name(node);
        if name.is_none() {
            log::trace!(
                "dropping {:?} without a name{}",
                node.kind(),
                describe_position(node),
            );
        }
        name
    }

    pub(crate) fn description<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Description> {
        let description_node = child_of_kind(node, SyntaxKind::Description)?;
        let literal = child_of_kind(description_node, SyntaxKind::StringValue)?;
        match decode_string_literal(&literal.text()) {
            Ok(decoded) => Some(Description {
                content: decoded.value,
                block: decoded.block,
                location: self.location(description_node),
            }),
            Err(err) => {
                log::trace!(
                    "dropping description{}: {err}",
                    describe_position(description_node),
                );
                None
            },
        }
    }

    pub(crate) fn directives<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Vec<Arc<Directive>> {
        children_of_kind(node, SyntaxKind::Directive)
            .filter_map(|child| self.directive(child))
            .collect()
    }
}

pub(crate) fn child_of_kind<N: ConcreteSyntaxNode>(
    node: &N,
    kind: SyntaxKind,
) -> Option<&N> {
    node.children().find(|child| child.kind() == kind)
}

pub(crate) fn children_of_kind<N: ConcreteSyntaxNode>(
    node: &N,
    kind: SyntaxKind,
) -> impl Iterator<Item = &N> {
    node.children().filter(move |child| child.kind() == kind)
}

pub(crate) fn has_keyword<N: ConcreteSyntaxNode>(node: &N, keyword: &str) -> bool {
    children_of_kind(node, SyntaxKind::Keyword).any(|child| child.text() == keyword)
}

pub(crate) fn describe_position<N: ConcreteSyntaxNode>(node: &N) -> String {
    match node.location() {
        Some(position) => format!(" at {position}"),
        None => String::new(),
    }
}
