//! A tolerant recursive-descent parser from GraphQL text to [`SyntaxNode`]
//! trees.
//!
//! The parser always produces a tree. Missing pieces are left out of the
//! node that should have contained them (and reported as [`SyntaxError`]s);
//! tokens that cannot be placed are wrapped in [`SyntaxKind::Error`] nodes.
//! Deciding what a half-written construct means is left to AST conversion.

use crate::lexer::Lexer;
use crate::token::Token;
use crate::token::TokenKind;
use crate::SourcePosition;
use crate::SyntaxError;
use crate::SyntaxKind;
use crate::SyntaxNode;
use std::sync::Arc;

/// The tree for one document plus everything the parser recovered from.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub tree: SyntaxNode,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses `source` into a concrete syntax tree whose root has kind
/// [`SyntaxKind::Document`].
///
/// `source_name` (typically a file path) is attached to every node position.
pub fn parse_document(source: &str, source_name: Option<&str>) -> ParseOutput {
    let source_name: Option<Arc<str>> = source_name.map(Arc::from);
    let mut parser = Parser::new(Lexer::new(source, source_name).collect());
    let tree = parser.parse_document();
    ParseOutput {
        tree,
        errors: parser.errors,
    }
}

const OPERATION_KEYWORDS: [&str; 3] = ["mutation", "query", "subscription"];

const TYPE_SYSTEM_KEYWORDS: [&str; 8] = [
    "directive",
    "enum",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    errors: Vec<SyntaxError>,
}

impl<'src> Parser<'src> {
    fn new(tokens: Vec<Token<'src>>) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: vec![],
        }
    }

    // =========================================================================
    // Token cursor helpers
    // =========================================================================

    fn current(&self) -> &Token<'src> {
        self.nth(0)
    }

    /// The lexer always ends with `Eof`, so lookahead past the end keeps
    /// returning it.
    fn nth(&self, n: usize) -> &Token<'src> {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    fn at_eof(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn at_punct(&self, punct: &str) -> bool {
        self.current().is_punctuator(punct)
    }

    fn at_keyword(&self, keyword: &str) -> bool {
        self.current().is_name(keyword)
    }

    fn at_any_name(&self) -> bool {
        self.current().kind == TokenKind::Name
    }

    fn at_string(&self) -> bool {
        self.current().kind == TokenKind::StringValue
    }

    fn current_position(&self) -> SourcePosition {
        self.current().position.clone()
    }

    fn error_here(&mut self, message: impl Into<String>) {
        let position = self.current_position();
        self.errors.push(SyntaxError::new(message, position));
    }

    /// Moves the current token (and its leading comments) into `sink` as a
    /// leaf of the given kind.
    fn bump(&mut self, kind: SyntaxKind, sink: &mut Vec<SyntaxNode>) {
        let token = self.current().clone();
        if token.kind == TokenKind::Eof {
            return;
        }
        self.pos += 1;
        for comment in token.leading_comments {
            sink.push(SyntaxNode::token(
                SyntaxKind::Comment,
                comment.text,
                Some(comment.position),
            ));
        }
        sink.push(SyntaxNode::token(kind, token.text, Some(token.position)));
    }

    /// Wraps the current token in an `Error` node and records why.
    fn bump_error(&mut self, sink: &mut Vec<SyntaxNode>) {
        let message = match &self.current().kind {
            TokenKind::Error(message) => message.to_owned(),
            _ => format!("Unexpected `{}`", self.current().text),
        };
        self.error_here(message);
        let mut error_children = vec![];
        self.bump(SyntaxKind::Punctuation, &mut error_children);
        sink.push(SyntaxNode::composite(SyntaxKind::Error, error_children));
    }

    fn expect_punct(&mut self, punct: &str, sink: &mut Vec<SyntaxNode>) -> bool {
        if self.at_punct(punct) {
            self.bump(SyntaxKind::Punctuation, sink);
            true
        } else {
            self.error_here(format!("Expected `{punct}`"));
            false
        }
    }

    fn expect_name(&mut self, sink: &mut Vec<SyntaxNode>) -> bool {
        if self.at_any_name() {
            self.bump(SyntaxKind::Name, sink);
            true
        } else {
            self.error_here("Expected a name");
            false
        }
    }

    fn at_definition_start(&self) -> bool {
        let token = self.current();
        match token.kind {
            TokenKind::Punctuator => token.text == "{",
            TokenKind::Name => {
                OPERATION_KEYWORDS.contains(&token.text)
                    || TYPE_SYSTEM_KEYWORDS.contains(&token.text)
                    || token.text == "extend"
                    || token.text == "fragment"
            },
            TokenKind::StringValue => {
                let next = self.nth(1);
                next.kind == TokenKind::Name
                    && TYPE_SYSTEM_KEYWORDS.contains(&next.text)
            },
            _ => false,
        }
    }

    // =========================================================================
    // Document & definitions
    // =========================================================================

    fn parse_document(&mut self) -> SyntaxNode {
        let mut children = vec![];
        while !self.at_eof() {
            if let Some(def) = self.parse_definition() {
                children.push(def);
                continue;
            }

            // Skip ahead to something that can start a definition.
            let mut error_children = vec![];
            let message = match &self.current().kind {
                TokenKind::Error(message) => message.to_owned(),
                _ => format!(
                    "Expected a definition, found `{}`",
                    self.current().text,
                ),
            };
            self.error_here(message);
            loop {
                self.bump(SyntaxKind::Punctuation, &mut error_children);
                if self.at_eof() || self.at_definition_start() {
                    break;
                }
            }
            children.push(SyntaxNode::composite(
                SyntaxKind::Error,
                error_children,
            ));
        }

        // Comments trailing the last definition ride on the `Eof` token.
        let eof = self.current().clone();
        for comment in eof.leading_comments {
            children.push(SyntaxNode::token(
                SyntaxKind::Comment,
                comment.text,
                Some(comment.position),
            ));
        }

        SyntaxNode::composite(SyntaxKind::Document, children)
    }

    fn parse_definition(&mut self) -> Option<SyntaxNode> {
        if !self.at_definition_start() {
            return None;
        }

        if self.at_punct("{") {
            return Some(self.parse_operation_definition());
        }

        if self.at_string() {
            let description = self.parse_description();
            return Some(self.parse_type_system_definition(vec![description]));
        }

        let keyword = self.current().text;
        if OPERATION_KEYWORDS.contains(&keyword) {
            Some(self.parse_operation_definition())
        } else if keyword == "fragment" {
            Some(self.parse_fragment_definition())
        } else if keyword == "extend" {
            Some(self.parse_type_system_extension())
        } else {
            Some(self.parse_type_system_definition(vec![]))
        }
    }

    fn parse_description(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::StringValue, &mut children);
        SyntaxNode::composite(SyntaxKind::Description, children)
    }

    fn parse_type_system_definition(
        &mut self,
        children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        let keyword = self.current().text;
        match keyword {
            "directive" => self.parse_directive_definition(children),
            "enum" => self.parse_enum_type(SyntaxKind::EnumTypeDefinition, children),
            "input" => self.parse_input_object_type(
                SyntaxKind::InputObjectTypeDefinition,
                children,
            ),
            "interface" => self.parse_object_like_type(
                SyntaxKind::InterfaceTypeDefinition,
                children,
            ),
            "scalar" => self.parse_scalar_type(SyntaxKind::ScalarTypeDefinition, children),
            "schema" => self.parse_schema(SyntaxKind::SchemaDefinition, children),
            "type" => self.parse_object_like_type(
                SyntaxKind::ObjectTypeDefinition,
                children,
            ),
            "union" => self.parse_union_type(SyntaxKind::UnionTypeDefinition, children),
            _ => {
                // A description followed by something that is not a
                // type-system keyword.
                self.error_here("Expected a type-system definition after description");
                SyntaxNode::composite(SyntaxKind::Error, children)
            },
        }
    }

    fn parse_type_system_extension(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Keyword, &mut children);

        let keyword = self.current().text;
        match keyword {
            "enum" => self.parse_enum_type(SyntaxKind::EnumTypeExtension, children),
            "input" => self.parse_input_object_type(
                SyntaxKind::InputObjectTypeExtension,
                children,
            ),
            "interface" => self.parse_object_like_type(
                SyntaxKind::InterfaceTypeExtension,
                children,
            ),
            "scalar" => self.parse_scalar_type(SyntaxKind::ScalarTypeExtension, children),
            "schema" => self.parse_schema(SyntaxKind::SchemaExtension, children),
            "type" => self.parse_object_like_type(
                SyntaxKind::ObjectTypeExtension,
                children,
            ),
            "union" => self.parse_union_type(SyntaxKind::UnionTypeExtension, children),
            _ => {
                self.error_here(
                    "Expected `schema`, `scalar`, `type`, `interface`, `union`, \
                     `enum` or `input` after `extend`",
                );
                SyntaxNode::composite(SyntaxKind::Error, children)
            },
        }
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn parse_schema(
        &mut self,
        kind: SyntaxKind,
        mut children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        self.bump(SyntaxKind::Keyword, &mut children);
        self.parse_directives(true, &mut children);
        if self.at_punct("{") {
            self.bump(SyntaxKind::Punctuation, &mut children);
            loop {
                if self.at_punct("}") {
                    self.bump(SyntaxKind::Punctuation, &mut children);
                    break;
                }
                if self.at_eof() {
                    self.error_here("Expected `}`");
                    break;
                }
                if self.at_any_name() {
                    children.push(self.parse_operation_type_definition());
                } else {
                    self.bump_error(&mut children);
                }
            }
        } else if kind == SyntaxKind::SchemaDefinition {
            self.error_here("Expected `{`");
        }
        SyntaxNode::composite(kind, children)
    }

    fn parse_operation_type_definition(&mut self) -> SyntaxNode {
        let mut children = vec![];
        if !OPERATION_KEYWORDS.contains(&self.current().text) {
            self.error_here("Expected `query`, `mutation` or `subscription`");
        }
        self.bump(SyntaxKind::Keyword, &mut children);
        if self.expect_punct(":", &mut children) {
            if self.at_any_name() {
                children.push(self.parse_named_type());
            } else {
                self.error_here("Expected a type name");
            }
        }
        SyntaxNode::composite(SyntaxKind::OperationTypeDefinition, children)
    }

    fn parse_scalar_type(
        &mut self,
        kind: SyntaxKind,
        mut children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        self.bump(SyntaxKind::Keyword, &mut children);
        self.expect_name(&mut children);
        self.parse_directives(true, &mut children);
        SyntaxNode::composite(kind, children)
    }

    /// Object and interface types (and their extensions) share a grammar.
    fn parse_object_like_type(
        &mut self,
        kind: SyntaxKind,
        mut children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        self.bump(SyntaxKind::Keyword, &mut children);
        self.expect_name(&mut children);
        if self.at_keyword("implements") {
            self.parse_implements_interfaces(&mut children);
        }
        self.parse_directives(true, &mut children);
        if self.at_punct("{") {
            self.parse_fields_definition(&mut children);
        }
        SyntaxNode::composite(kind, children)
    }

    fn parse_implements_interfaces(&mut self, sink: &mut Vec<SyntaxNode>) {
        self.bump(SyntaxKind::Keyword, sink);
        if self.at_punct("&") {
            self.bump(SyntaxKind::Punctuation, sink);
        }
        if !self.at_any_name() {
            self.error_here("Expected an interface name");
            return;
        }
        sink.push(self.parse_named_type());
        loop {
            if self.at_punct("&") {
                self.bump(SyntaxKind::Punctuation, sink);
                if self.at_any_name() {
                    sink.push(self.parse_named_type());
                } else {
                    self.error_here("Expected an interface name");
                    return;
                }
            } else if self.at_any_name() && !self.at_definition_start() {
                // Legacy comma/space separated interface lists.
                sink.push(self.parse_named_type());
            } else {
                return;
            }
        }
    }

    fn parse_fields_definition(&mut self, sink: &mut Vec<SyntaxNode>) {
        self.bump(SyntaxKind::Punctuation, sink);
        loop {
            if self.at_punct("}") {
                self.bump(SyntaxKind::Punctuation, sink);
                return;
            }
            if self.at_eof() {
                self.error_here("Expected `}`");
                return;
            }
            if self.at_any_name() || self.at_string() {
                sink.push(self.parse_field_definition());
            } else {
                self.bump_error(sink);
            }
        }
    }

    fn parse_field_definition(&mut self) -> SyntaxNode {
        let mut children = vec![];
        if self.at_string() {
            children.push(self.parse_description());
        }
        self.expect_name(&mut children);
        if self.at_punct("(") {
            self.parse_arguments_definition(&mut children);
        }
        if self.expect_punct(":", &mut children) {
            match self.parse_type() {
                Some(type_node) => children.push(type_node),
                None => self.error_here("Expected a type"),
            }
        }
        self.parse_directives(true, &mut children);
        SyntaxNode::composite(SyntaxKind::FieldDefinition, children)
    }

    fn parse_arguments_definition(&mut self, sink: &mut Vec<SyntaxNode>) {
        self.bump(SyntaxKind::Punctuation, sink);
        loop {
            if self.at_punct(")") {
                self.bump(SyntaxKind::Punctuation, sink);
                return;
            }
            if self.at_eof() {
                self.error_here("Expected `)`");
                return;
            }
            if self.at_any_name() || self.at_string() {
                sink.push(self.parse_input_value_definition());
            } else {
                self.bump_error(sink);
            }
        }
    }

    fn parse_input_value_definition(&mut self) -> SyntaxNode {
        let mut children = vec![];
        if self.at_string() {
            children.push(self.parse_description());
        }
        self.expect_name(&mut children);
        if self.expect_punct(":", &mut children) {
            match self.parse_type() {
                Some(type_node) => children.push(type_node),
                None => self.error_here("Expected a type"),
            }
        }
        if self.at_punct("=") {
            children.push(self.parse_default_value(true));
        }
        self.parse_directives(true, &mut children);
        SyntaxNode::composite(SyntaxKind::InputValueDefinition, children)
    }

    fn parse_default_value(&mut self, is_const: bool) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Punctuation, &mut children);
        match self.parse_value(is_const) {
            Some(value) => children.push(value),
            None => self.error_here("Expected a value"),
        }
        SyntaxNode::composite(SyntaxKind::DefaultValue, children)
    }

    fn parse_union_type(
        &mut self,
        kind: SyntaxKind,
        mut children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        self.bump(SyntaxKind::Keyword, &mut children);
        self.expect_name(&mut children);
        self.parse_directives(true, &mut children);
        if self.at_punct("=") {
            self.bump(SyntaxKind::Punctuation, &mut children);
            if self.at_punct("|") {
                self.bump(SyntaxKind::Punctuation, &mut children);
            }
            loop {
                if self.at_any_name() {
                    children.push(self.parse_named_type());
                } else {
                    self.error_here("Expected a union member type");
                    break;
                }
                if self.at_punct("|") {
                    self.bump(SyntaxKind::Punctuation, &mut children);
                } else {
                    break;
                }
            }
        }
        SyntaxNode::composite(kind, children)
    }

    fn parse_enum_type(
        &mut self,
        kind: SyntaxKind,
        mut children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        self.bump(SyntaxKind::Keyword, &mut children);
        self.expect_name(&mut children);
        self.parse_directives(true, &mut children);
        if self.at_punct("{") {
            self.bump(SyntaxKind::Punctuation, &mut children);
            loop {
                if self.at_punct("}") {
                    self.bump(SyntaxKind::Punctuation, &mut children);
                    break;
                }
                if self.at_eof() {
                    self.error_here("Expected `}`");
                    break;
                }
                if self.at_any_name() || self.at_string() {
                    children.push(self.parse_enum_value_definition());
                } else {
                    self.bump_error(&mut children);
                }
            }
        }
        SyntaxNode::composite(kind, children)
    }

    fn parse_enum_value_definition(&mut self) -> SyntaxNode {
        let mut children = vec![];
        if self.at_string() {
            children.push(self.parse_description());
        }
        self.expect_name(&mut children);
        self.parse_directives(true, &mut children);
        SyntaxNode::composite(SyntaxKind::EnumValueDefinition, children)
    }

    fn parse_input_object_type(
        &mut self,
        kind: SyntaxKind,
        mut children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        self.bump(SyntaxKind::Keyword, &mut children);
        self.expect_name(&mut children);
        self.parse_directives(true, &mut children);
        if self.at_punct("{") {
            self.bump(SyntaxKind::Punctuation, &mut children);
            loop {
                if self.at_punct("}") {
                    self.bump(SyntaxKind::Punctuation, &mut children);
                    break;
                }
                if self.at_eof() {
                    self.error_here("Expected `}`");
                    break;
                }
                if self.at_any_name() || self.at_string() {
                    children.push(self.parse_input_value_definition());
                } else {
                    self.bump_error(&mut children);
                }
            }
        }
        SyntaxNode::composite(kind, children)
    }

    fn parse_directive_definition(
        &mut self,
        mut children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        self.bump(SyntaxKind::Keyword, &mut children);
        if self.expect_punct("@", &mut children) {
            self.expect_name(&mut children);
        }
        if self.at_punct("(") {
            self.parse_arguments_definition(&mut children);
        }
        if self.at_keyword("repeatable") {
            self.bump(SyntaxKind::Keyword, &mut children);
        }
        if self.at_keyword("on") {
            self.bump(SyntaxKind::Keyword, &mut children);
            if self.at_punct("|") {
                self.bump(SyntaxKind::Punctuation, &mut children);
            }
            loop {
                if self.at_any_name() && !self.at_definition_start() {
                    self.bump(SyntaxKind::DirectiveLocation, &mut children);
                } else {
                    self.error_here("Expected a directive location");
                    break;
                }
                if self.at_punct("|") {
                    self.bump(SyntaxKind::Punctuation, &mut children);
                } else {
                    break;
                }
            }
        } else {
            self.error_here("Expected `on`");
        }
        SyntaxNode::composite(SyntaxKind::DirectiveDefinition, children)
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn parse_operation_definition(&mut self) -> SyntaxNode {
        let mut children = vec![];
        if !self.at_punct("{") {
            self.bump(SyntaxKind::Keyword, &mut children);
            if self.at_any_name() {
                self.bump(SyntaxKind::Name, &mut children);
            }
            if self.at_punct("(") {
                self.parse_variable_definitions(&mut children);
            }
            self.parse_directives(false, &mut children);
        }
        if self.at_punct("{") {
            children.push(self.parse_selection_set());
        } else {
            self.error_here("Expected a selection set");
        }
        SyntaxNode::composite(SyntaxKind::OperationDefinition, children)
    }

    fn parse_variable_definitions(&mut self, sink: &mut Vec<SyntaxNode>) {
        self.bump(SyntaxKind::Punctuation, sink);
        loop {
            if self.at_punct(")") {
                self.bump(SyntaxKind::Punctuation, sink);
                return;
            }
            if self.at_eof() {
                self.error_here("Expected `)`");
                return;
            }
            if self.at_punct("$") {
                sink.push(self.parse_variable_definition());
            } else {
                self.bump_error(sink);
            }
        }
    }

    fn parse_variable_definition(&mut self) -> SyntaxNode {
        let mut children = vec![self.parse_variable()];
        if self.expect_punct(":", &mut children) {
            match self.parse_type() {
                Some(type_node) => children.push(type_node),
                None => self.error_here("Expected a type"),
            }
        }
        if self.at_punct("=") {
            children.push(self.parse_default_value(true));
        }
        self.parse_directives(true, &mut children);
        SyntaxNode::composite(SyntaxKind::VariableDefinition, children)
    }

    fn parse_variable(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Punctuation, &mut children);
        self.expect_name(&mut children);
        SyntaxNode::composite(SyntaxKind::Variable, children)
    }

    fn parse_fragment_definition(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Keyword, &mut children);
        if self.at_keyword("on") {
            self.error_here("Expected a fragment name");
        } else {
            self.expect_name(&mut children);
        }
        if self.at_keyword("on") {
            children.push(self.parse_type_condition());
        } else {
            self.error_here("Expected a type condition");
        }
        self.parse_directives(false, &mut children);
        if self.at_punct("{") {
            children.push(self.parse_selection_set());
        } else {
            self.error_here("Expected a selection set");
        }
        SyntaxNode::composite(SyntaxKind::FragmentDefinition, children)
    }

    fn parse_type_condition(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Keyword, &mut children);
        if self.at_any_name() {
            children.push(self.parse_named_type());
        } else {
            self.error_here("Expected a type name");
        }
        SyntaxNode::composite(SyntaxKind::TypeCondition, children)
    }

    fn parse_selection_set(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Punctuation, &mut children);
        loop {
            if self.at_punct("}") {
                self.bump(SyntaxKind::Punctuation, &mut children);
                break;
            }
            if self.at_eof() {
                self.error_here("Expected `}`");
                break;
            }
            if self.at_punct("...") {
                children.push(self.parse_fragment_selection());
            } else if self.at_any_name() {
                children.push(self.parse_field());
            } else {
                self.bump_error(&mut children);
            }
        }
        SyntaxNode::composite(SyntaxKind::SelectionSet, children)
    }

    fn parse_field(&mut self) -> SyntaxNode {
        let mut children = vec![];
        if self.nth(1).is_punctuator(":") {
            let mut alias_children = vec![];
            self.bump(SyntaxKind::Name, &mut alias_children);
            self.bump(SyntaxKind::Punctuation, &mut alias_children);
            children.push(SyntaxNode::composite(SyntaxKind::Alias, alias_children));
        }
        self.expect_name(&mut children);
        if self.at_punct("(") {
            self.parse_arguments(false, &mut children);
        }
        self.parse_directives(false, &mut children);
        if self.at_punct("{") {
            children.push(self.parse_selection_set());
        }
        SyntaxNode::composite(SyntaxKind::Field, children)
    }

    fn parse_fragment_selection(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Punctuation, &mut children);

        if self.at_any_name() && !self.at_keyword("on") {
            self.bump(SyntaxKind::Name, &mut children);
            self.parse_directives(false, &mut children);
            return SyntaxNode::composite(SyntaxKind::FragmentSpread, children);
        }

        if self.at_keyword("on") {
            children.push(self.parse_type_condition());
        }
        self.parse_directives(false, &mut children);
        if self.at_punct("{") {
            children.push(self.parse_selection_set());
        } else {
            self.error_here("Expected a selection set");
        }
        SyntaxNode::composite(SyntaxKind::InlineFragment, children)
    }

    // =========================================================================
    // Shared pieces
    // =========================================================================

    fn parse_directives(&mut self, is_const: bool, sink: &mut Vec<SyntaxNode>) {
        while self.at_punct("@") {
            let mut children = vec![];
            self.bump(SyntaxKind::Punctuation, &mut children);
            self.expect_name(&mut children);
            if self.at_punct("(") {
                self.parse_arguments(is_const, &mut children);
            }
            sink.push(SyntaxNode::composite(SyntaxKind::Directive, children));
        }
    }

    fn parse_arguments(&mut self, is_const: bool, sink: &mut Vec<SyntaxNode>) {
        self.bump(SyntaxKind::Punctuation, sink);
        loop {
            if self.at_punct(")") {
                self.bump(SyntaxKind::Punctuation, sink);
                return;
            }
            if self.at_eof() {
                self.error_here("Expected `)`");
                return;
            }
            if self.at_any_name() {
                let mut children = vec![];
                self.bump(SyntaxKind::Name, &mut children);
                if self.expect_punct(":", &mut children) {
                    match self.parse_value(is_const) {
                        Some(value) => children.push(value),
                        None => self.error_here("Expected a value"),
                    }
                }
                sink.push(SyntaxNode::composite(SyntaxKind::Argument, children));
            } else {
                self.bump_error(sink);
            }
        }
    }

    fn parse_named_type(&mut self) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Name, &mut children);
        SyntaxNode::composite(SyntaxKind::NamedType, children)
    }

    fn parse_type(&mut self) -> Option<SyntaxNode> {
        let inner =
            if self.at_punct("[") {
                let mut children = vec![];
                self.bump(SyntaxKind::Punctuation, &mut children);
                match self.parse_type() {
                    Some(item_type) => children.push(item_type),
                    None => self.error_here("Expected a list item type"),
                }
                self.expect_punct("]", &mut children);
                SyntaxNode::composite(SyntaxKind::ListType, children)
            } else if self.at_any_name() {
                self.parse_named_type()
            } else {
                return None;
            };

        if self.at_punct("!") {
            let mut children = vec![inner];
            self.bump(SyntaxKind::Punctuation, &mut children);
            Some(SyntaxNode::composite(SyntaxKind::NonNullType, children))
        } else {
            Some(inner)
        }
    }

    fn parse_value(&mut self, is_const: bool) -> Option<SyntaxNode> {
        let text = self.current().text;
        let kind = match self.current().kind.clone() {
            TokenKind::IntValue => SyntaxKind::IntValue,
            TokenKind::FloatValue => SyntaxKind::FloatValue,
            TokenKind::StringValue => SyntaxKind::StringValue,
            TokenKind::Name => match text {
                "true" | "false" => SyntaxKind::BooleanValue,
                "null" => SyntaxKind::NullValue,
                _ => SyntaxKind::EnumValue,
            },
            TokenKind::Punctuator => match text {
                "$" => {
                    if is_const {
                        self.error_here("Variables are not allowed in constant values");
                    }
                    return Some(self.parse_variable());
                },
                "[" => return Some(self.parse_list_value(is_const)),
                "{" => return Some(self.parse_object_value(is_const)),
                _ => return None,
            },
            TokenKind::Error(_) | TokenKind::Eof => return None,
        };

        // Literal values are bare leaves, so comments inside a value are not
        // kept.
        let mut children = vec![];
        self.bump(kind, &mut children);
        children.pop()
    }

    fn parse_list_value(&mut self, is_const: bool) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Punctuation, &mut children);
        loop {
            if self.at_punct("]") {
                self.bump(SyntaxKind::Punctuation, &mut children);
                break;
            }
            if self.at_eof() {
                self.error_here("Expected `]`");
                break;
            }
            match self.parse_value(is_const) {
                Some(value) => children.push(value),
                None => self.bump_error(&mut children),
            }
        }
        SyntaxNode::composite(SyntaxKind::ListValue, children)
    }

    fn parse_object_value(&mut self, is_const: bool) -> SyntaxNode {
        let mut children = vec![];
        self.bump(SyntaxKind::Punctuation, &mut children);
        loop {
            if self.at_punct("}") {
                self.bump(SyntaxKind::Punctuation, &mut children);
                break;
            }
            if self.at_eof() {
                self.error_here("Expected `}`");
                break;
            }
            if self.at_any_name() {
                let mut field_children = vec![];
                self.bump(SyntaxKind::Name, &mut field_children);
                if self.expect_punct(":", &mut field_children) {
                    match self.parse_value(is_const) {
                        Some(value) => field_children.push(value),
                        None => self.error_here("Expected a value"),
                    }
                }
                children.push(SyntaxNode::composite(
                    SyntaxKind::ObjectField,
                    field_children,
                ));
            } else {
                self.bump_error(&mut children);
            }
        }
        SyntaxNode::composite(SyntaxKind::ObjectValue, children)
    }
}
