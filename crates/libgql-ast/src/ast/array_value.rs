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

/// A list literal: `[1, 2, 3]`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ArrayValue {
    pub meta: NodeMeta,
    pub values: Vec<Value>,
}

#[inherent]
impl AstNode for ArrayValue {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::ArrayValue
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::VALUES, self.values.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::ArrayValue,
            &[child_keys::VALUES],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            values: reader.list(child_keys::VALUES)?,
        })
    }

    pub fn is_equal_to(&self, _other: &Self) -> bool {
        true
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("[");
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                printer.write(", ");
            }
            value.print_to(printer);
        }
        printer.write("]");
    }
}
