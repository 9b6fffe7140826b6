//! Tests for the sequential and parallel tree transformers.

use crate::ast::child_keys;
use crate::ast::ChildrenContractError;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::FromNode;
use crate::ast::NodeKind;
use crate::ast::TypeDefinition;
use crate::ast::TypeName;
use crate::deep_equal;
use crate::tests::utils::convert_clean;
use crate::tests::utils::KITCHEN_SINK_SCHEMA;
use crate::AstNode;
use crate::Node;
use crate::ParallelTreeTransformer;
use crate::TransformAction;
use crate::TransformContext;
use crate::TreeTransformer;
use std::sync::Arc;

fn definitions(node: &Node) -> Vec<Definition> {
    let Node::Document(document) = node else {
        panic!("expected a document");
    };
    document.definitions.clone()
}

fn rename_type_names(ctx: &TransformContext<'_>) -> TransformAction {
    match ctx.node() {
        Node::TypeName(type_name) if type_name.name == "Int" => {
            TransformAction::Replace(Node::from(type_name.transform(|staged| {
                staged.name = "BigInt".to_string();
            })))
        },
        _ => TransformAction::Continue,
    }
}

#[test]
fn untouched_subtrees_are_shared() {
    let root = Node::from(convert_clean("type A { a: Int }\ntype B { b: String }"));
    let result = TreeTransformer::new(rename_type_names)
        .transform(&root)
        .unwrap()
        .unwrap();

    assert_eq!(result.to_source(), "type A {\n  a: BigInt\n}\n\ntype B {\n  b: String\n}\n");

    let before = definitions(&root);
    let after = definitions(&result);
    let (Definition::Type(TypeDefinition::Object(a_before)), Definition::Type(TypeDefinition::Object(a_after))) =
        (&before[0], &after[0])
    else {
        panic!("expected object types");
    };
    assert!(!Arc::ptr_eq(a_before, a_after));
    assert!(!a_before.is_equal_to(a_after));

    // `B` has no `Int` in it and must be reused as-is.
    let (Definition::Type(TypeDefinition::Object(b_before)), Definition::Type(TypeDefinition::Object(b_after))) =
        (&before[1], &after[1])
    else {
        panic!("expected object types");
    };
    assert!(Arc::ptr_eq(b_before, b_after));
}

#[test]
fn unchanged_tree_is_returned_as_is() {
    let root = Node::from(convert_clean(KITCHEN_SINK_SCHEMA));
    let result = TreeTransformer::new(|_: &TransformContext<'_>| TransformAction::Continue)
        .transform(&root)
        .unwrap()
        .unwrap();
    assert!(result.ptr_eq(&root));
}

#[test]
fn delete_removes_from_parent_list() {
    let root = Node::from(convert_clean("type T { a: Int @x b: Int @y }"));
    let result = TreeTransformer::new(|ctx: &TransformContext<'_>| match ctx.node() {
        Node::Directive(directive) if directive.name == "x" => TransformAction::Delete,
        Node::FieldDefinition(field) if field.name == "b" => TransformAction::Delete,
        _ => TransformAction::Continue,
    })
    .transform(&root)
    .unwrap()
    .unwrap();

    assert_eq!(result.to_source(), "type T {\n  a: Int\n}\n");
}

#[test]
fn deleting_a_required_child_is_a_contract_violation() {
    let root = Node::from(convert_clean("type T { a: Int }"));
    let result = TreeTransformer::new(|ctx: &TransformContext<'_>| {
        if ctx.key() == Some(child_keys::TYPE) {
            TransformAction::Delete
        } else {
            TransformAction::Continue
        }
    })
    .transform(&root);

    assert_eq!(
        result,
        Err(ChildrenContractError::WrongChildCount {
            owner: NodeKind::FieldDefinition,
            key: child_keys::TYPE,
            count: 0,
        }),
    );
}

#[test]
fn deleting_the_root_yields_none() {
    let root = Node::from(convert_clean("scalar S"));
    let result = TreeTransformer::new(|_: &TransformContext<'_>| TransformAction::Delete)
        .transform(&root)
        .unwrap();
    assert!(result.is_none());
}

/// A replacement's own children are visited too.
#[test]
fn replacements_are_descended_into() {
    let root = Node::from(convert_clean("type T { a: Int }"));
    let replacement = Node::from(convert_clean("type T { a: Int b: [Int] }"));
    let Some(Definition::Type(replacement_type)) = definitions(&replacement).first().cloned() else {
        panic!("expected a type");
    };

    let result = TreeTransformer::new(|ctx: &TransformContext<'_>| match ctx.node() {
        Node::ObjectTypeDefinition(_) => TransformAction::Replace(Node::from(replacement_type.clone())),
        _ => rename_type_names(ctx),
    })
    .transform(&root)
    .unwrap()
    .unwrap();

    assert_eq!(result.to_source(), "type T {\n  a: BigInt\n  b: [BigInt]\n}\n");
}

#[test]
fn skip_leaves_the_subtree_alone() {
    let root = Node::from(convert_clean("type A { a: Int }\ntype B { b: Int }"));
    let result = TreeTransformer::new(|ctx: &TransformContext<'_>| match ctx.node() {
        Node::ObjectTypeDefinition(object) if object.name == "A" => TransformAction::Skip,
        _ => rename_type_names(ctx),
    })
    .transform(&root)
    .unwrap()
    .unwrap();

    assert_eq!(result.to_source(), "type A {\n  a: Int\n}\n\ntype B {\n  b: BigInt\n}\n");
}

#[test]
fn abort_keeps_changes_made_so_far() {
    let root = Node::from(convert_clean("type T { a: Int stop: Int c: Int }"));
    let mut transformer = TreeTransformer::new(|ctx: &TransformContext<'_>| match ctx.node() {
        Node::FieldDefinition(field) if field.name == "stop" => TransformAction::Abort,
        _ => rename_type_names(ctx),
    });
    let result = transformer.transform(&root).unwrap().unwrap();

    assert!(transformer.was_aborted());
    assert_eq!(result.to_source(), "type T {\n  a: BigInt\n  stop: Int\n  c: Int\n}\n");
}

#[test]
fn context_sees_the_rebuilt_parent_chain() {
    let root = Node::from(convert_clean("type T { a: Int }"));
    let mut seen = vec![];
    TreeTransformer::new(|ctx: &TransformContext<'_>| {
        if let Node::TypeName(_) = ctx.node() {
            seen.push((
                ctx.depth(),
                ctx.key(),
                ctx.index(),
                ctx.parents().iter().map(Node::kind).collect::<Vec<_>>(),
                ctx.parent().map(Node::kind),
            ));
        }
        TransformAction::Continue
    })
    .transform(&root)
    .unwrap();

    assert_eq!(
        seen,
        vec![(
            3,
            Some(child_keys::TYPE),
            Some(0),
            vec![NodeKind::Document, NodeKind::ObjectTypeDefinition, NodeKind::FieldDefinition],
            Some(NodeKind::FieldDefinition),
        )],
    );
}

#[test]
fn typed_results_convert_back() {
    let root = Node::from(convert_clean("type T { a: Int }"));
    let result = TreeTransformer::new(rename_type_names).transform(&root).unwrap().unwrap();
    let document = Arc::<Document>::from_node(result).unwrap();
    assert_eq!(document.definitions.len(), 1);

    let name = Arc::<TypeName>::from_node(Node::from(document));
    assert!(name.is_err());
}

// =============================================================================
// Parallel
// =============================================================================

#[test]
fn parallel_matches_sequential() {
    let root = Node::from(convert_clean(KITCHEN_SINK_SCHEMA));
    let callback = |ctx: &TransformContext<'_>| match ctx.node() {
        Node::Directive(directive) if directive.name == "deprecated" => TransformAction::Delete,
        Node::TypeName(type_name) if type_name.name == "String" => {
            TransformAction::Replace(Node::from(type_name.transform(|staged| {
                staged.name = "Text".to_string();
            })))
        },
        _ => TransformAction::Continue,
    };

    let sequential = TreeTransformer::new(callback).transform(&root).unwrap().unwrap();
    let parallel = ParallelTreeTransformer::new(callback).transform(&root).unwrap().unwrap();

    assert!(deep_equal(&sequential, &parallel));
    assert_eq!(sequential, parallel);
    assert_eq!(sequential.to_source(), parallel.to_source());
    assert!(!sequential.to_source().contains("@deprecated"));
    assert!(sequential.to_source().contains("fields: Text!"));
}

#[test]
fn parallel_shares_untouched_subtrees() {
    let root = Node::from(convert_clean("type A { a: Int }\ntype B { b: String }"));
    let result = ParallelTreeTransformer::new(rename_type_names)
        .transform(&root)
        .unwrap()
        .unwrap();

    let before = definitions(&root);
    let after = definitions(&result);
    let (Definition::Type(TypeDefinition::Object(b_before)), Definition::Type(TypeDefinition::Object(b_after))) =
        (&before[1], &after[1])
    else {
        panic!("expected object types");
    };
    assert!(Arc::ptr_eq(b_before, b_after));
}

#[test]
fn parallel_reports_contract_violations_and_aborts() {
    let root = Node::from(convert_clean("type T { a: Int b: Int }"));
    let violating = ParallelTreeTransformer::new(|ctx: &TransformContext<'_>| {
        if ctx.key() == Some(child_keys::TYPE) {
            TransformAction::Delete
        } else {
            TransformAction::Continue
        }
    });
    assert!(violating.transform(&root).is_err());

    let aborting = ParallelTreeTransformer::new(|ctx: &TransformContext<'_>| match ctx.node() {
        Node::Document(_) => TransformAction::Continue,
        Node::ObjectTypeDefinition(_) => TransformAction::Abort,
        _ => TransformAction::Delete,
    });
    let result = aborting.transform(&root).unwrap().unwrap();
    assert!(aborting.was_aborted());
    assert!(result.ptr_eq(&root));
}
