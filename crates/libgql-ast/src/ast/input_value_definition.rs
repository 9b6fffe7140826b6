use crate::ast::child_keys;
use crate::ast::description::same_description;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::Type;
use crate::ast::Value;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// An argument definition, or a field of an input object type.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InputValueDefinition {
    pub meta: NodeMeta,
    pub description: Option<Description>,
    pub name: String,
    pub value_type: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Arc<Directive>>,
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_single(child_keys::TYPE, self.value_type.clone())
            .with_optional(child_keys::DEFAULT_VALUE, self.default_value.clone())
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::InputValueDefinition,
            &[
                child_keys::TYPE,
                child_keys::DEFAULT_VALUE,
                child_keys::DIRECTIVES,
            ],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            description: self.description.clone(),
            name: self.name.clone(),
            value_type: reader.required(child_keys::TYPE)?,
            default_value: reader.optional(child_keys::DEFAULT_VALUE)?,
            directives: reader.list(child_keys::DIRECTIVES)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name && same_description(&self.description, &other.description)
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.description(self.description.as_ref());
        printer.write(&self.name);
        printer.write(": ");
        self.value_type.print_to(printer);
        if let Some(default_value) = &self.default_value {
            printer.write(" = ");
            default_value.print_to(printer);
        }
        printer.directives(&self.directives);
    }
}
