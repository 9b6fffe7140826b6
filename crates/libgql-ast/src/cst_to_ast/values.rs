use crate::ast::ArrayValue;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListType;
use crate::ast::NonNullType;
use crate::ast::NullValue;
use crate::ast::NullableType;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Type;
use crate::ast::TypeName;
use crate::ast::Value;
use crate::ast::VariableReference;
use crate::cst_to_ast::child_of_kind;
use crate::cst_to_ast::children_of_kind;
use crate::cst_to_ast::describe_position;
use crate::cst_to_ast::string_literal::decode_string_literal;
use crate::cst_to_ast::Converter;
use libgql_syntax::ConcreteSyntaxNode;
use libgql_syntax::SyntaxKind;
use std::sync::Arc;

impl Converter<'_> {
    // =========================================================================
    // Values
    // =========================================================================

    /// The first child of `node` that is a value literal.
    pub(crate) fn value_child<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Value> {
        let child = node.children().find(|child| child.kind().is_value())?;
        self.value(child)
    }

    pub(crate) fn value<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Value> {
        let meta = self.meta(node);
        let value = match node.kind() {
            SyntaxKind::IntValue => {
                let text = node.text();
                let Some(literal) = IntValue::from_literal(&text) else {
                    log::trace!(
                        "dropping invalid int literal `{text}`{}",
                        describe_position(node),
                    );
                    return None;
                };
                Value::Int(Arc::new(IntValue { meta, ..literal }))
            },
            SyntaxKind::FloatValue => {
                let text = node.text();
                let Some(literal) = FloatValue::from_literal(&text) else {
                    log::trace!(
                        "dropping invalid float literal `{text}`{}",
                        describe_position(node),
                    );
                    return None;
                };
                Value::Float(Arc::new(FloatValue { meta, ..literal }))
            },
            SyntaxKind::StringValue => {
                let decoded = match decode_string_literal(&node.text()) {
                    Ok(decoded) => decoded,
                    Err(err) => {
                        log::trace!(
                            "dropping string literal{}: {err}",
                            describe_position(node),
                        );
                        return None;
                    },
                };
                Value::String(Arc::new(StringValue {
                    meta,
                    value: decoded.value,
                    block: decoded.block,
                }))
            },
            SyntaxKind::BooleanValue => Value::Boolean(Arc::new(BooleanValue {
                meta,
                value: node.text() == "true",
            })),
            SyntaxKind::NullValue => Value::Null(Arc::new(NullValue { meta })),
            SyntaxKind::EnumValue => Value::Enum(Arc::new(EnumValue {
                meta,
                name: node.text().into_owned(),
            })),
            SyntaxKind::Variable => Value::Variable(Arc::new(VariableReference {
                meta,
                name: Self::required_name(node)?,
            })),
            SyntaxKind::ListValue => Value::Array(Arc::new(ArrayValue {
                meta,
                values: node
                    .children()
                    .filter(|child| child.kind().is_value())
                    .filter_map(|child| self.value(child))
                    .collect(),
            })),
            SyntaxKind::ObjectValue => Value::Object(Arc::new(ObjectValue {
                meta,
                fields: children_of_kind(node, SyntaxKind::ObjectField)
                    .filter_map(|child| self.object_field(child))
                    .collect(),
            })),
            other => {
                log::trace!("dropping unexpected {other:?} in value position");
                return None;
            },
        };
        Some(value)
    }

    fn object_field<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<ObjectField>> {
        let name = Self::required_name(node)?;
        let Some(value) = self.value_child(node) else {
            log::trace!(
                "dropping object field `{name}` without a value{}",
                describe_position(node),
            );
            return None;
        };
        Some(Arc::new(ObjectField {
            meta: self.meta(node),
            name,
            value,
        }))
    }

    // =========================================================================
    // Type annotations
    // =========================================================================

    /// The first child of `node` that is a type annotation.
    pub(crate) fn type_child<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Type> {
        let child = node.children().find(|child| child.kind().is_type())?;
        self.type_annotation(child)
    }

    pub(crate) fn type_annotation<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Type> {
        match node.kind() {
            SyntaxKind::NamedType => Some(Type::Named(self.type_name(node)?)),
            SyntaxKind::ListType => {
                let Some(item_type) = self.type_child(node) else {
                    log::trace!(
                        "dropping list type without an item type{}",
                        describe_position(node),
                    );
                    return None;
                };
                Some(Type::List(Arc::new(ListType {
                    meta: self.meta(node),
                    item_type,
                })))
            },
            SyntaxKind::NonNullType => {
                let wrapped = match self.type_child(node) {
                    Some(Type::Named(named)) => NullableType::Named(named),
                    Some(Type::List(list)) => NullableType::List(list),
                    Some(Type::NonNull(_)) => {
                        log::trace!(
                            "dropping non-null type wrapping a non-null type{}",
                            describe_position(node),
                        );
                        return None;
                    },
                    None => {
                        log::trace!(
                            "dropping non-null type without a wrapped type{}",
                            describe_position(node),
                        );
                        return None;
                    },
                };
                Some(Type::NonNull(Arc::new(NonNullType {
                    meta: self.meta(node),
                    wrapped,
                })))
            },
            _ => None,
        }
    }

    /// Converts a `NamedType` node.
    pub(crate) fn type_name<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<TypeName>> {
        Some(Arc::new(TypeName {
            meta: self.meta(node),
            name: Self::required_name(node)?,
        }))
    }

    /// Converts the `NamedType` inside a `TypeCondition` node.
    pub(crate) fn type_condition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<TypeName>> {
        let condition = child_of_kind(node, SyntaxKind::TypeCondition)?;
        self.type_name(child_of_kind(condition, SyntaxKind::NamedType)?)
    }
}
