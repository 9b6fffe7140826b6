use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// One location (`FIELD_DEFINITION`, `QUERY`, ...) a directive definition
/// may be applied at. The name is kept as written.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct DirectiveLocation {
    pub meta: NodeMeta,
    pub name: String,
}

impl DirectiveLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: NodeMeta::default(),
            name: name.into(),
        }
    }
}

#[inherent]
impl AstNode for DirectiveLocation {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveLocation
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        children.into_reader(NodeKind::DirectiveLocation, &[])?;
        Ok(self.clone())
    }

    pub fn is_equal_to(&self, other: &Self) -> bool {
        self.name == other.name
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        printer.write(&self.name);
    }
}
