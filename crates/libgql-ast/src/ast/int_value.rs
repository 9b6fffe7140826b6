use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// An integer literal.
///
/// The literal text is kept exactly as written so values of any size
/// survive a print/parse round trip; [`as_i32`](IntValue::as_i32) and
/// [`as_i64`](IntValue::as_i64) interpret it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct IntValue {
    pub meta: NodeMeta,
    pub value: String,
}

impl IntValue {
    /// Accepts `text` only if it matches the GraphQL `IntValue` grammar:
    /// `-? (0 | [1-9][0-9]*)`.
    pub fn from_literal(text: &str) -> Option<Self> {
        is_int_literal(text).then(|| Self {
            meta: NodeMeta::default(),
            value: text.to_string(),
        })
    }

    pub fn as_i32(&self) -> Option<i32> {
        self.value.parse().ok()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

pub(crate) fn is_int_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        bytes => bytes.iter().all(u8::is_ascii_digit),
    }
}

#[inherent]
impl AstNode for IntValue {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::IntValue
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        children.into_reader(NodeKind::IntValue, &[])?;
        Ok(self.clone())
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.value == other.value
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write(&self.value);
    }
}
