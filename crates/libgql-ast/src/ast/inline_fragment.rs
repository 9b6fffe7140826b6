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

/// `... on Type @dirs { ... }`; the type condition is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct InlineFragment {
    pub meta: NodeMeta,
    pub type_condition: Option<Arc<TypeName>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Option<Arc<SelectionSet>>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::InlineFragment
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_optional(child_keys::TYPE_CONDITION, self.type_condition.clone())
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
            .with_optional(child_keys::SELECTION_SET, self.selection_set.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::InlineFragment,
            &[
                child_keys::TYPE_CONDITION,
                child_keys::DIRECTIVES,
                child_keys::SELECTION_SET,
            ],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            type_condition: reader.optional(child_keys::TYPE_CONDITION)?,
            directives: reader.list(child_keys::DIRECTIVES)?,
            selection_set: reader.optional(child_keys::SELECTION_SET)?,
        })
    }

    pub fn is_equal_to(&self, _other: &Self) -> bool {
        true
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("...");
        if let Some(type_condition) = &self.type_condition {
            printer.write(" on ");
            type_condition.print_to(printer);
        }
        printer.directives(&self.directives);
        if let Some(selection_set) = &self.selection_set {
            printer.write(" ");
            selection_set.print_to(printer);
        }
    }
}
