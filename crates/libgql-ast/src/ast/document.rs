use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::Definition;
use crate::ast::Node;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// A GraphQL document: an ordered list of definitions, which may mix
/// type-system and executable definitions.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Document {
    pub meta: NodeMeta,
    pub definitions: Vec<Definition>,
}

impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self {
            meta: NodeMeta::default(),
            definitions,
        }
    }

    /// Type-system definitions and extensions, in document order.
    pub fn schema_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }

    /// Operations and fragments, in document order.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_executable())
    }
}

#[inherent]
impl AstNode for Document {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Document
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with(child_keys::DEFINITIONS, self.definitions.iter().cloned())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::Document,
            &[child_keys::DEFINITIONS],
        )?;
        Ok(Self {
            meta: self.meta.clone(),
            definitions: reader.list(child_keys::DEFINITIONS)?,
        })
    }

    pub fn is_equal_to(&self, _other: &Self) -> bool {
        true
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        for (idx, definition) in self.definitions.iter().enumerate() {
            if idx > 0 {
                printer.newline();
                printer.newline();
            }
            Node::from(definition.clone()).print_to(printer);
        }
        if !self.definitions.is_empty() {
            printer.newline();
        }
    }
}
