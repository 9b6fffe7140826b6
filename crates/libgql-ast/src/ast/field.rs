use crate::ast::child_keys;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Directive;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::SelectionSet;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A field selection: `alias: name(args) @dirs { ... }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Field {
    pub meta: NodeMeta,
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Arc<Argument>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Option<Arc<SelectionSet>>,
}

impl Field {
    /// The key this field's result appears under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[inherent]
impl AstNode for Field {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Field
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::ARGUMENTS, self.arguments.iter().cloned())
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
            .with_optional(child_keys::SELECTION_SET, self.selection_set.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::Field,
            &[
                child_keys::ARGUMENTS,
                child_keys::DIRECTIVES,
                child_keys::SELECTION_SET,
            ],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            alias: self.alias.clone(),
            name: self.name.clone(),
            arguments: reader.list(child_keys::ARGUMENTS)?,
            directives: reader.list(child_keys::DIRECTIVES)?,
            selection_set: reader.optional(child_keys::SELECTION_SET)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name && self.alias == other.alias
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        if let Some(alias) = &self.alias {
            printer.write(alias);
            printer.write(": ");
        }
        printer.write(&self.name);
        printer.arguments(&self.arguments);
        printer.directives(&self.directives);
        if let Some(selection_set) = &self.selection_set {
            printer.write(" ");
            selection_set.print_to(printer);
        }
    }
}
