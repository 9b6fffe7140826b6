use crate::ast::child_keys;
use crate::ast::description::same_description;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::DefinitionForm;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::OperationKind;
use crate::ast::OperationTypeDefinition;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// `schema { query: Query }` or, with [`DefinitionForm::Extension`],
/// `extend schema @dir { mutation: Mutation }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SchemaDefinition {
    pub meta: NodeMeta,
    pub form: DefinitionForm,
    pub description: Option<Description>,
    pub directives: Vec<Arc<Directive>>,
    pub operation_types: Vec<Arc<OperationTypeDefinition>>,
}

impl SchemaDefinition {
    /// The root type name configured for `operation`, if any.
    pub fn root_type_name(&self, operation: OperationKind) -> Option<&str> {
        self.operation_types
            .iter()
            .find(|op_type| op_type.operation == operation)
            .map(|op_type| op_type.type_name.name.as_str())
    }
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::SchemaDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
            .with(child_keys::OPERATION_TYPES, self.operation_types.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::SchemaDefinition,
            &[child_keys::DIRECTIVES, child_keys::OPERATION_TYPES],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            form: self.form,
            description: self.description.clone(),
            directives: reader.list(child_keys::DIRECTIVES)?,
            operation_types: reader.list(child_keys::OPERATION_TYPES)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.form == other.form && same_description(&self.description, &other.description)
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.description(self.description.as_ref());
        printer.definition_keyword(self.form, "schema");
        printer.directives(&self.directives);
        printer.block(&self.operation_types);
    }
}
