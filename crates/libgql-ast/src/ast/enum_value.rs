use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// An enum literal such as `RED` (any name other than `true`, `false` or
/// `null`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EnumValue {
    pub meta: NodeMeta,
    pub name: String,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: NodeMeta::default(),
            name: name.into(),
        }
    }
}

#[inherent]
impl AstNode for EnumValue {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        children.into_reader(NodeKind::EnumValue, &[])?;
        Ok(self.clone())
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write(&self.name);
    }
}
