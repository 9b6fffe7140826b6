use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::OperationKind;
use crate::ast::TypeName;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// `query: Query` inside a schema definition.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OperationTypeDefinition {
    pub meta: NodeMeta,
    pub operation: OperationKind,
    pub type_name: Arc<TypeName>,
}

#[inherent]
impl AstNode for OperationTypeDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationTypeDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_single(child_keys::TYPE_NAME, self.type_name.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::OperationTypeDefinition,
            &[child_keys::TYPE_NAME],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            operation: self.operation,
            type_name: reader.required(child_keys::TYPE_NAME)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.operation == other.operation
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write(self.operation.as_str());
        printer.write(": ");
        self.type_name.print_to(printer);
    }
}
