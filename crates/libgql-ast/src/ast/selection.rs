use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::FromNode;
use crate::ast::InlineFragment;
use crate::ast::Node;
use crate::printer::SdlPrinter;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Selection {
    Field(Arc<Field>),
    FragmentSpread(Arc<FragmentSpread>),
    InlineFragment(Arc<InlineFragment>),
}

impl Selection {
    pub fn print_to(&self, printer: &mut SdlPrinter) {
        match self {
            Selection::Field(field) => field.print_to(printer),
            Selection::FragmentSpread(spread) => spread.print_to(printer),
            Selection::InlineFragment(inline) => inline.print_to(printer),
        }
    }
}

impl From<Selection> for Node {
    fn from(value: Selection) -> Self {
        match value {
            Selection::Field(s) => Node::Field(s),
            Selection::FragmentSpread(s) => Node::FragmentSpread(s),
            Selection::InlineFragment(s) => Node::InlineFragment(s),
        }
    }
}

impl FromNode for Selection {
    fn from_node(node: Node) -> Result<Self, Node> {
        Ok(match node {
            Node::Field(s) => Selection::Field(s),
            Node::FragmentSpread(s) => Selection::FragmentSpread(s),
            Node::InlineFragment(s) => Selection::InlineFragment(s),
            other => return Err(other),
        })
    }
}
