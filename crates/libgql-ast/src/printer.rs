//! Synthetic formatting of AST nodes back to GraphQL source text.
//!
//! Output uses standard spacing (two-space indentation, one definition per
//! paragraph) rather than the original layout. Printing a converted document
//! and converting the output again yields a [`deep_equal`](crate::deep_equal)
//! document. Block strings built by hand that no block literal can spell
//! exactly (every line indented, say) are printed in the quoted form.

use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DefinitionForm;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::InputValueDefinition;
use crate::ast::Node;
use crate::ast::TypeName;
use std::sync::Arc;

pub fn print_document(document: &Document) -> String {
    document.to_source()
}

pub fn print_node(node: &Node) -> String {
    node.to_source()
}

/// An indentation-aware output buffer that nodes print themselves into.
#[derive(Debug, Default)]
pub struct SdlPrinter {
    out: String,
    indent: usize,
    at_line_start: bool,
}

impl SdlPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.indent {
                self.out.push_str("  ");
            }
            self.at_line_start = false;
        }
        self.out.push_str(text);
    }

    /// Starts a new line; indentation is emitted lazily by the next write so
    /// blank lines carry no trailing whitespace.
    pub fn newline(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    pub fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.indent += 1;
        f(self);
        self.indent -= 1;
    }

    pub(crate) fn description(&mut self, description: Option<&Description>) {
        if let Some(description) = description {
            self.string(&description.content, description.block);
            self.newline();
        }
    }

    /// `extend ` (for extensions) followed by the definition keyword.
    pub(crate) fn definition_keyword(&mut self, form: DefinitionForm, keyword: &str) {
        if form.is_extension() {
            self.write("extend ");
        }
        self.write(keyword);
    }

    pub(crate) fn implements(&mut self, interfaces: &[Arc<TypeName>]) {
        if interfaces.is_empty() {
            return;
        }
        self.write(" implements ");
        self.separated(interfaces, " & ");
    }

    pub(crate) fn directives(&mut self, directives: &[Arc<Directive>]) {
        for directive in directives {
            self.write(" ");
            directive.print_to(self);
        }
    }

    pub(crate) fn arguments(&mut self, arguments: &[Arc<Argument>]) {
        if arguments.is_empty() {
            return;
        }
        self.write("(");
        self.separated(arguments, ", ");
        self.write(")");
    }

    /// Argument definitions print inline unless one of them carries a
    /// description.
    pub(crate) fn input_value_definitions(
        &mut self,
        definitions: &[Arc<InputValueDefinition>],
    ) {
        if definitions.is_empty() {
            return;
        }
        if definitions.iter().all(|def| def.description.is_none()) {
            self.write("(");
            self.separated(definitions, ", ");
            self.write(")");
            return;
        }
        self.write("(");
        self.indented(|printer| {
            for definition in definitions {
                printer.newline();
                definition.print_to(printer);
            }
        });
        self.newline();
        self.write(")");
    }

    /// ` {` + one item per indented line + `}`. Prints nothing for an empty
    /// list.
    pub(crate) fn block<T: AstNode>(&mut self, items: &[Arc<T>]) {
        if items.is_empty() {
            return;
        }
        self.write(" {");
        self.indented(|printer| {
            for item in items {
                printer.newline();
                item.print_to(printer);
            }
        });
        self.newline();
        self.write("}");
    }

    pub(crate) fn separated<T: AstNode>(&mut self, items: &[Arc<T>], separator: &str) {
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.write(separator);
            }
            item.print_to(self);
        }
    }

    /// Writes a string literal. Block values that a block string cannot
    /// reproduce exactly are written in the quoted form instead.
    pub(crate) fn string(&mut self, value: &str, block: bool) {
        let layout = if block { block_layout(value) } else { None };
        let Some(layout) = layout else {
            self.write(&escape_string(value));
            return;
        };

        self.write("\"\"\"");
        let mut lines = value.split('\n');
        if layout == BlockLayout::FirstLineInline
            && let Some(first) = lines.next()
        {
            self.write(&escape_block_line(first));
        }
        for line in lines {
            self.newline();
            self.write(&escape_block_line(line));
        }
        self.newline();
        self.write("\"\"\"");
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum BlockLayout {
    /// Every line goes on its own line, indented to the current level.
    OwnLines,

    /// The first line stays on the opening `"""` line. Block-string dedent
    /// never applies to that line, so its leading whitespace survives.
    FirstLineInline,
}

/// Picks a block layout that decodes back to exactly `value`, if one exists.
fn block_layout(value: &str) -> Option<BlockLayout> {
    if value.is_empty() {
        return Some(BlockLayout::OwnLines);
    }
    if value
        .chars()
        .any(|ch| (ch as u32) < 0x20 && ch != '\t' && ch != '\n')
    {
        return None;
    }

    let lines: Vec<&str> = value.split('\n').collect();
    // Leading and trailing blank lines are trimmed when decoding.
    if lines.first().is_some_and(|line| is_blank(line))
        || lines.last().is_some_and(|line| is_blank(line))
    {
        return None;
    }

    let min_indent = |lines: &[&str]| {
        lines
            .iter()
            .filter(|line| !is_blank(line))
            .map(|line| leading_whitespace_len(line))
            .min()
    };
    if min_indent(&lines) == Some(0) {
        return Some(BlockLayout::OwnLines);
    }
    match min_indent(&lines[1..]) {
        None | Some(0) => Some(BlockLayout::FirstLineInline),
        Some(_) => None,
    }
}

fn escape_block_line(line: &str) -> String {
    line.replace("\"\"\"", "\\\"\"\"")
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('"');
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{0008}' => escaped.push_str("\\b"),
            '\u{000C}' => escaped.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                escaped.push_str(&format!("\\u{:04X}", ch as u32));
            },
            ch => escaped.push(ch),
        }
    }
    escaped.push('"');
    escaped
}
