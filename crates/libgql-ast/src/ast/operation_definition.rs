use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Directive;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::OperationKind;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A query, mutation or subscription. The `{ ... }` shorthand converts to
/// an anonymous query.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub meta: NodeMeta,
    pub operation: OperationKind,
    pub name: Option<String>,
    pub variable_definitions: Vec<Arc<VariableDefinition>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Option<Arc<SelectionSet>>,
}

impl OperationDefinition {
    fn is_shorthand(&self) -> bool {
        self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
            && self.selection_set.is_some()
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(
                child_keys::VARIABLE_DEFINITIONS,
                self.variable_definitions.iter().cloned(),
            )
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
            .with_optional(child_keys::SELECTION_SET, self.selection_set.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::OperationDefinition,
            &[
                child_keys::VARIABLE_DEFINITIONS,
                child_keys::DIRECTIVES,
                child_keys::SELECTION_SET,
            ],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            operation: self.operation,
            name: self.name.clone(),
            variable_definitions: reader.list(child_keys::VARIABLE_DEFINITIONS)?,
            directives: reader.list(child_keys::DIRECTIVES)?,
            selection_set: reader.optional(child_keys::SELECTION_SET)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.operation == other.operation && self.name == other.name
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        if !self.is_shorthand() {
            printer.write(self.operation.as_str());
            if let Some(name) = &self.name {
                printer.write(" ");
                printer.write(name);
            }
            if !self.variable_definitions.is_empty() {
                printer.write("(");
                printer.separated(&self.variable_definitions, ", ");
                printer.write(")");
            }
            printer.directives(&self.directives);
            if self.selection_set.is_some() {
                printer.write(" ");
            }
        }
        if let Some(selection_set) = &self.selection_set {
            selection_set.print_to(printer);
        }
    }
}
