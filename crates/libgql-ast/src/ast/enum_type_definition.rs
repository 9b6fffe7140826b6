use crate::ast::child_keys;
use crate::ast::description::same_description;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::DefinitionForm;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct EnumTypeDefinition {
    pub meta: NodeMeta,
    pub form: DefinitionForm,
    pub description: Option<Description>,
    pub name: String,
    pub directives: Vec<Arc<Directive>>,
    pub values: Vec<Arc<EnumValueDefinition>>,
}

#[inherent]
impl AstNode for EnumTypeDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
            .with(child_keys::VALUES, self.values.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::EnumTypeDefinition,
            &[child_keys::DIRECTIVES, child_keys::VALUES],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            form: self.form,
            description: self.description.clone(),
            name: self.name.clone(),
            directives: reader.list(child_keys::DIRECTIVES)?,
            values: reader.list(child_keys::VALUES)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
            && self.form == other.form
            && same_description(&self.description, &other.description)
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.description(self.description.as_ref());
        printer.definition_keyword(self.form, "enum ");
        printer.write(&self.name);
        printer.directives(&self.directives);
        printer.block(&self.values);
    }
}
