use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A string literal. `value` is unescaped; `block` records whether it was
/// written as a `"""block string"""`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StringValue {
    pub meta: NodeMeta,
    pub value: String,
    pub block: bool,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            meta: NodeMeta::default(),
            value: value.into(),
            block: false,
        }
    }
}

#[inherent]
impl AstNode for StringValue {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::StringValue
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        children.into_reader(NodeKind::StringValue, &[])?;
        Ok(self.clone())
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.value == other.value && self.block == other.block
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.string(&self.value, self.block);
    }
}
