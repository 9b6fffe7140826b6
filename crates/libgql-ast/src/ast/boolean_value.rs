use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct BooleanValue {
    pub meta: NodeMeta,
    pub value: bool,
}

impl BooleanValue {
    pub fn new(value: bool) -> Self {
        Self {
            meta: NodeMeta::default(),
            value,
        }
    }
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::BooleanValue
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        children.into_reader(NodeKind::BooleanValue, &[])?;
        Ok(self.clone())
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.value == other.value
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write(if self.value { "true" } else { "false" });
    }
}
