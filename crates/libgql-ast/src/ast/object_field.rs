use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::Value;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// One `name: value` entry of an [`ObjectValue`](crate::ast::ObjectValue).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ObjectField {
    pub meta: NodeMeta,
    pub name: String,
    pub value: Value,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_single(child_keys::VALUE, self.value.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::ObjectField,
            &[child_keys::VALUE],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            name: self.name.clone(),
            value: reader.required(child_keys::VALUE)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write(&self.name);
        printer.write(": ");
        self.value.print_to(printer);
    }
}
