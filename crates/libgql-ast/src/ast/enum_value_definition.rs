use crate::ast::child_keys;
use crate::ast::description::same_description;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EnumValueDefinition {
    pub meta: NodeMeta,
    pub description: Option<Description>,
    pub name: String,
    pub directives: Vec<Arc<Directive>>,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::EnumValueDefinition,
            &[child_keys::DIRECTIVES],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            description: self.description.clone(),
            name: self.name.clone(),
            directives: reader.list(child_keys::DIRECTIVES)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name && same_description(&self.description, &other.description)
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.description(self.description.as_ref());
        printer.write(&self.name);
        printer.directives(&self.directives);
    }
}
