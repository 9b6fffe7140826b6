use crate::ast::child_keys;
use crate::ast::description::same_description;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::DefinitionForm;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::ImplementingType;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::TypeName;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// An interface type definition (`interface Foo ...`) or extension
/// (`extend interface Foo ...`).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InterfaceTypeDefinition {
    pub meta: NodeMeta,
    pub form: DefinitionForm,
    pub description: Option<Description>,
    pub name: String,
    pub implements: Vec<Arc<TypeName>>,
    pub directives: Vec<Arc<Directive>>,
    pub fields: Vec<Arc<FieldDefinition>>,
}

impl ImplementingType for InterfaceTypeDefinition {
    fn implements(&self) -> &[Arc<TypeName>] {
        &self.implements
    }

    fn fields(&self) -> &[Arc<FieldDefinition>] {
        &self.fields
    }
}

#[inherent]
impl AstNode for InterfaceTypeDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::IMPLEMENTS, self.implements.iter().cloned())
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
            .with(child_keys::FIELDS, self.fields.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::InterfaceTypeDefinition,
            &[
                child_keys::IMPLEMENTS,
                child_keys::DIRECTIVES,
                child_keys::FIELDS,
            ],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            form: self.form,
            description: self.description.clone(),
            name: self.name.clone(),
            implements: reader.list(child_keys::IMPLEMENTS)?,
            directives: reader.list(child_keys::DIRECTIVES)?,
            fields: reader.list(child_keys::FIELDS)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
            && self.form == other.form
            && same_description(&self.description, &other.description)
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.description(self.description.as_ref());
        printer.definition_keyword(self.form, "interface ");
        printer.write(&self.name);
        printer.implements(&self.implements);
        printer.directives(&self.directives);
        printer.block(&self.fields);
    }
}
