use crate::ast::child_keys;
use crate::ast::AstNode;
use crate::ast::ChildrenContractError;
use crate::ast::NodeChildrenContainer;
use crate::ast::NodeKind;
use crate::ast::NodeMeta;
use crate::ast::NullableType;
use crate::ast::Type;
use crate::printer::SdlPrinter;
use inherent::inherent;
use serde::Deserialize;
use serde::Serialize;

/// `T!`. The wrapped type is a [`NullableType`], so a non-null type can
/// never wrap another non-null type.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct NonNullType {
    pub meta: NodeMeta,
    pub wrapped: NullableType,
}

#[inherent]
impl AstNode for NonNullType {
    pub fn meta(&self) -> &NodeMeta {
        &self.meta
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::NonNullType
    }

    pub fn named_children(&self) -> NodeChildrenContainer {
        NodeChildrenContainer::new()
            .with_single(child_keys::TYPE, self.wrapped.clone())
    }

    pub fn try_with_new_children(
        &self,
        children: NodeChildrenContainer,
    ) -> Result<Self, ChildrenContractError> {
        let mut reader = children.into_reader(
            NodeKind::NonNullType,
            &[child_keys::TYPE],
        )?;
        let wrapped = match reader.required::<Type>(child_keys::TYPE)? {
            Type::Named(named) => NullableType::Named(named),
            Type::List(list) => NullableType::List(list),
            Type::NonNull(_) => return Err(ChildrenContractError::NestedNonNull),
        };
        Ok(Self {
            meta: self.meta.clone(),
            wrapped,
        })
    }

    pub fn is_equal_to(&self, _other: &Self) -> bool {
        true
    }

    pub fn print_to(&self, printer: &mut SdlPrinter) {
        Type::from(self.wrapped.clone()).print_to(printer);
        printer.write("!");
    }
}
