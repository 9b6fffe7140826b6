use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::ObjectField;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// An input object literal: `{ a: 1, b: "x" }`. Field order is kept.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ObjectValue {
    pub meta: NodeMeta,
    pub fields: Vec<Arc<ObjectField>>,
}

impl ObjectValue {
    pub fn field(&self, name: &str) -> Option<&Arc<ObjectField>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectValue
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::FIELDS, self.fields.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::ObjectValue,
            &[child_keys::FIELDS],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            fields: reader.list(child_keys::FIELDS)?,
        })
    }

    pub fn is_equal_to(&self, _other: &Self) -> bool {
        true
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("{");
        printer.separated(&self.fields, ", ");
        printer.write("}");
    }
}
