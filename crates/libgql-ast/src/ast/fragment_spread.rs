use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Directive;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// `...FragmentName @dirs`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FragmentSpread {
    pub meta: NodeMeta,
    pub name: String,
    pub directives: Vec<Arc<Directive>>,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentSpread
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::DIRECTIVES, self.directives.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::FragmentSpread,
            &[child_keys::DIRECTIVES],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            name: self.name.clone(),
            directives: reader.list(child_keys::DIRECTIVES)?,
        })
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("...");
        printer.write(&self.name);
        printer.directives(&self.directives);
    }
}
