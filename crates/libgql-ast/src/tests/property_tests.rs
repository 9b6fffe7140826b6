//! Property-based checks over generated value and type trees.

use crate::ast::ArrayValue;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListType;
use crate::ast::NodeMeta;
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
use crate::deep_equal;
use crate::tests::utils::all_nodes;
use crate::tests::utils::convert_clean;
use crate::AstNode;
use crate::Node;
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Strategies
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    "[_A-Za-z][_0-9A-Za-z]{0,8}"
}

fn arb_enum_name() -> impl Strategy<Value = String> {
    arb_name().prop_filter("reserved enum value", |name| {
        !matches!(name.as_str(), "true" | "false" | "null")
    })
}

fn arb_int() -> impl Strategy<Value = Value> {
    any::<i64>().prop_filter_map("valid int literal", |n| {
        IntValue::from_literal(&n.to_string()).map(|v| Value::Int(Arc::new(v)))
    })
}

fn arb_float() -> impl Strategy<Value = Value> {
    (-1000i32..1000, 0u32..1000, prop::option::of(-20i32..20)).prop_filter_map(
        "valid float literal",
        |(whole, fraction, exponent)| {
            let literal = match exponent {
                Some(exponent) => format!("{whole}.{fraction}e{exponent}"),
                None => format!("{whole}.{fraction}"),
            };
            FloatValue::from_literal(&literal).map(|v| Value::Float(Arc::new(v)))
        },
    )
}

fn arb_leaf_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_int(),
        arb_float(),
        "[a-zA-Z0-9 \\\\\"\n\t]{0,12}"
            .prop_map(|s| Value::String(Arc::new(StringValue::new(s)))),
        any::<bool>().prop_map(|b| Value::Boolean(Arc::new(BooleanValue::new(b)))),
        Just(Value::Null(Arc::new(NullValue::default()))),
        arb_enum_name().prop_map(|name| Value::Enum(Arc::new(EnumValue::new(name)))),
        arb_name().prop_map(|name| Value::Variable(Arc::new(VariableReference::new(name)))),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf_value().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(|values| {
                Value::Array(Arc::new(ArrayValue {
                    meta: NodeMeta::default(),
                    values,
                }))
            }),
            prop::collection::vec((arb_name(), inner), 0..3).prop_map(|fields| {
                Value::Object(Arc::new(ObjectValue {
                    meta: NodeMeta::default(),
                    fields: fields
                        .into_iter()
                        .map(|(name, value)| {
                            Arc::new(ObjectField {
                                meta: NodeMeta::default(),
                                name,
                                value,
                            })
                        })
                        .collect(),
                }))
            }),
        ]
    })
}

fn list_of(item_type: Type) -> Arc<ListType> {
    Arc::new(ListType {
        meta: NodeMeta::default(),
        item_type,
    })
}

fn non_null(wrapped: NullableType) -> Type {
    Type::NonNull(Arc::new(NonNullType {
        meta: NodeMeta::default(),
        wrapped,
    }))
}

fn arb_type() -> impl Strategy<Value = Type> {
    let named = arb_name().prop_map(|name| Type::Named(Arc::new(TypeName::new(name))));
    named.prop_recursive(6, 16, 1, |inner| {
        prop_oneof![
            inner.clone().prop_map(|item| Type::List(list_of(item))),
            // `T!!` is unrepresentable, so a non-null wraps its input only
            // when that input is nullable.
            inner.prop_map(|ty| match ty {
                Type::Named(named) => non_null(NullableType::Named(named)),
                Type::List(list) => non_null(NullableType::List(list)),
                non_null_type @ Type::NonNull(_) => non_null_type,
            }),
        ]
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn reparse_value(value: &Value) -> Node {
    let source = format!("{{ f(v: {}) }}", Node::from(value.clone()).to_source());
    let document = Node::from(convert_clean(&source));
    all_nodes(&document)
        .into_iter()
        .find_map(|node| match node {
            Node::Argument(argument) => Some(Node::from(argument.value.clone())),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no argument in `{source}`"))
}

fn reparse_type(ty: &Type) -> Node {
    let source = format!("type T {{ f: {} }}", Node::from(ty.clone()).to_source());
    let document = Node::from(convert_clean(&source));
    all_nodes(&document)
        .into_iter()
        .find_map(|node| match node {
            Node::FieldDefinition(field) => Some(Node::from(field.field_type.clone())),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no field in `{source}`"))
}

fn rebuilds_identically(root: &Node) -> bool {
    all_nodes(root).iter().all(|node| {
        node.try_with_new_children(node.named_children())
            .is_ok_and(|rebuilt| rebuilt == *node)
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn values_rebuild_from_their_own_children(value in arb_value()) {
        prop_assert!(rebuilds_identically(&Node::from(value)));
    }

    #[test]
    fn types_rebuild_from_their_own_children(ty in arb_type()) {
        prop_assert!(rebuilds_identically(&Node::from(ty)));
    }

    #[test]
    fn deep_copies_are_equal_but_unshared(value in arb_value()) {
        let original = Node::from(value);
        let copy = original.deep_copy();
        prop_assert!(deep_equal(&original, &copy));
        prop_assert!(!copy.ptr_eq(&original));
        prop_assert_eq!(original.to_source(), copy.to_source());
    }

    #[test]
    fn printed_values_reparse_equal(value in arb_value()) {
        let reparsed = reparse_value(&value);
        prop_assert!(deep_equal(&Node::from(value), &reparsed));
    }

    #[test]
    fn printed_types_reparse_equal(ty in arb_type()) {
        let reparsed = reparse_type(&ty);
        prop_assert!(deep_equal(&Node::from(ty), &reparsed));
    }
}
