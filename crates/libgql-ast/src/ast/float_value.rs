use crate::ast::int_value::is_int_literal;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A float literal, kept as its exact source text.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FloatValue {
    pub meta: NodeMeta,
    pub value: String,
}

impl FloatValue {
    /// Accepts `text` only if it matches the GraphQL `FloatValue` grammar:
    /// an integer part followed by a fractional part, an exponent part, or
    /// both.
    pub fn from_literal(text: &str) -> Option<Self> {
        is_float_literal(text).then(|| Self {
            meta: NodeMeta::default(),
            value: text.to_string(),
        })
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

fn is_float_literal(text: &str) -> bool {
    let int_end = text
        .char_indices()
        .find(|(idx, ch)| !(ch.is_ascii_digit() || (*idx == 0 && *ch == '-')))
        .map_or(text.len(), |(idx, _)| idx);
    let (int_part, mut rest) = text.split_at(int_end);
    if !is_int_literal(int_part) {
        return false;
    }

    let mut has_fraction_or_exponent = false;
    if let Some(fraction) = rest.strip_prefix('.') {
        let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return false;
        }
        rest = &fraction[digits..];
        has_fraction_or_exponent = true;
    }
    if let Some(exponent) = rest.strip_prefix(['e', 'E']) {
        let exponent = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if exponent.is_empty() || !exponent.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        rest = "";
        has_fraction_or_exponent = true;
    }
    has_fraction_or_exponent && rest.is_empty()
}

#[inherent]
impl AstNode for FloatValue {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::FloatValue
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        children.into_reader(NodeKind::FloatValue, &[])?;
        Ok(self.clone())
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.value == other.value
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write(&self.value);
    }
}
