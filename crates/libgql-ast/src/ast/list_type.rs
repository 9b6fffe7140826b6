use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::Type;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ListType {
    pub meta: NodeMeta,
    pub item_type: Type,
}

#[inherent]
impl AstNode for ListType {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::ListType
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_single(child_keys::TYPE, self.item_type.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::ListType,
            &[child_keys::TYPE],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            item_type: reader.required(child_keys::TYPE)?,
        })
    }

    pub fn is_equal_to(&self, _other: &Self) -> bool {
        true
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("[");
        self.item_type.print_to(printer);
        printer.write("]");
    }
}
