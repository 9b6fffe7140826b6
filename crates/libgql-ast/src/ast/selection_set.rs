use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::Selection;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SelectionSet {
    pub meta: NodeMeta,
    pub selections: Vec<Selection>,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::SelectionSet
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::SELECTIONS, self.selections.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::SelectionSet,
            &[child_keys::SELECTIONS],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            selections: reader.list(child_keys::SELECTIONS)?,
        })
    }

    pub fn is_equal_to(&self, _other: &Self) -> bool {
        true
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write("{");
        printer.indented(|printer| {
            for selection in &self.selections {
                printer.newline();
                selection.print_to(printer);
            }
        });
        printer.newline();
        printer.write("}");
    }
}
