use crate::ast::child_keys;
use crate::ast::description::same_description;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Description;
use crate::ast::DirectiveLocation;
use crate::ast::InputValueDefinition;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// `directive @name(args) repeatable on LOCATION | ...`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DirectiveDefinition {
    pub meta: NodeMeta,
    pub description: Option<Description>,
    pub name: String,
    pub arguments: Vec<Arc<InputValueDefinition>>,
    pub repeatable: bool,
    pub locations: Vec<Arc<DirectiveLocation>>,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::ARGUMENTS, self.arguments.iter().cloned())
            .with(child_keys::LOCATIONS, self.locations.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::DirectiveDefinition,
            &[child_keys::ARGUMENTS, child_keys::LOCATIONS],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            description: self.description.clone(),
            name: self.name.clone(),
            arguments: reader.list(child_keys::ARGUMENTS)?,
            repeatable: self.repeatable,
            locations: reader.list(child_keys::LOCATIONS)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
            && self.repeatable == other.repeatable
            && same_description(&self.description, &other.description)
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.description(self.description.as_ref());
        printer.write("directive @");
        printer.write(&self.name);
        printer.input_value_definitions(&self.arguments);
        if self.repeatable {
            printer.write(" repeatable");
        }
        printer.write(" on ");
        printer.separated(&self.locations, " | ");
    }
}
