use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Directive;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::SelectionSet;
use crate::ast::TypeName;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// `fragment Name on Type @dirs { ... }`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FragmentDefinition {
    pub meta: NodeMeta,
    pub name: String,
    pub type_condition: Arc<TypeName>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Option<Arc<SelectionSet>>,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentDefinition
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_single(child_keys::TYPE_CONDITION, self.type_condition.clone())
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
            .with_optional(child_keys::SELECTION_SET, self.selection_set.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::FragmentDefinition,
            &[
                child_keys::TYPE_CONDITION,
                child_keys::DIRECTIVES,
                child_keys::SELECTION_SET,
            ],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            name: self.name.clone(),
            type_condition: reader.required(child_keys::TYPE_CONDITION)?,
            directives: reader.list(child_keys::DIRECTIVES)?,
            selection_set: reader.optional(child_keys::SELECTION_SET)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("fragment ");
        printer.write(&self.name);
        printer.write(" on ");
        self.type_condition.print_to(printer);
        printer.directives(&self.directives);
        if let Some(selection_set) = &self.selection_set {
            printer.write(" ");
            selection_set.print_to(printer);
        }
    }
}
