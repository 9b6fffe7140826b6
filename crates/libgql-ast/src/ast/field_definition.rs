use crate::ast::child_keys;
use crate::ast::description::same_description;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::Type;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A field of an object or interface type.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub meta: NodeMeta,
    pub description: Option<Description>,
    pub name: String,
    pub arguments: Vec<Arc<InputValueDefinition>>,
    pub field_type: Type,
    pub directives: Vec<Arc<Directive>>,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::ARGUMENTS, self.arguments.iter().cloned())
            .with_single(child_keys::TYPE, self.field_type.clone())
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::FieldDefinition,
            &[
                child_keys::ARGUMENTS,
                child_keys::TYPE,
                child_keys::DIRECTIVES,
            ],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            description: self.description.clone(),
            name: self.name.clone(),
            arguments: reader.list(child_keys::ARGUMENTS)?,
            field_type: reader.required(child_keys::TYPE)?,
            directives: reader.list(child_keys::DIRECTIVES)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name && same_description(&self.description, &other.description)
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.description(self.description.as_ref());
        printer.write(&self.name);
        printer.input_value_definitions(&self.arguments);
        printer.write(": ");
        self.field_type.print_to(printer);
        printer.directives(&self.directives);
    }
}
