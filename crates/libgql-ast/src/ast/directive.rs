use crate::ast::child_keys;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A directive application such as `@deprecated(reason: "old")`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Directive {
    pub meta: NodeMeta,
    pub name: String,
    pub arguments: Vec<Arc<Argument>>,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Arc<Argument>> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[inherent]
impl AstNode for Directive {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Directive
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::ARGUMENTS, self.arguments.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::Directive,
            &[child_keys::ARGUMENTS],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            name: self.name.clone(),
            arguments: reader.list(child_keys::ARGUMENTS)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("@");
        printer.write(&self.name);
        printer.arguments(&self.arguments);
    }
}
