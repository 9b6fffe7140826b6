//! Tests for explicit-stack traversal.

use crate::ast::child_keys;
use crate::ast::ListType;
use crate::ast::Type;
use crate::ast::TypeName;
use crate::tests::utils::convert_clean;
use crate::Node;
use crate::NodeKind;
use crate::TraversalControl;
use crate::TraversalOutcome;
use crate::TraversalPhase;
use crate::Traverser;
use crate::TraverserContext;
use crate::Visitor;
use std::sync::Arc;

fn node_label(node: &Node) -> String {
    match node {
        Node::Document(_) => "Document".to_string(),
        Node::ObjectTypeDefinition(object) => format!("type {}", object.name),
        Node::FieldDefinition(field) => format!("field {}", field.name),
        Node::TypeName(type_name) => format!("name {}", type_name.name),
        other => format!("{:?}", other.kind()),
    }
}

/// Records `enter:<label>` / `leave:<label>` for every callback.
struct Recorder {
    skip: Option<&'static str>,
    abort: Option<&'static str>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            skip: None,
            abort: None,
        }
    }

    fn record(
        &self,
        ctx: &mut TraverserContext<'_, Vec<String>>,
        phase: &str,
    ) -> TraversalControl {
        let label = node_label(ctx.node());
        ctx.accumulator_mut().push(format!("{phase}:{label}"));
        if self.abort == Some(label.as_str()) {
            TraversalControl::Abort
        } else if self.skip == Some(label.as_str()) {
            TraversalControl::Skip
        } else {
            TraversalControl::Continue
        }
    }
}

impl Visitor<Vec<String>> for Recorder {
    fn enter(&mut self, ctx: &mut TraverserContext<'_, Vec<String>>) -> TraversalControl {
        self.record(ctx, "enter")
    }

    fn leave(&mut self, ctx: &mut TraverserContext<'_, Vec<String>>) -> TraversalControl {
        self.record(ctx, "leave")
    }
}

fn run(traverser: Traverser, recorder: &mut Recorder, source: &str) -> (TraversalOutcome, Vec<String>) {
    let root = Node::from(convert_clean(source));
    let mut log = vec![];
    let outcome = traverser.traverse(&root, recorder, &mut log);
    (outcome, log)
}

#[test]
fn pre_order_visits_fields_in_source_order() {
    let (outcome, log) = run(
        Traverser::pre_order(),
        &mut Recorder::new(),
        "type T { a: Int b: Int c: Int }",
    );

    assert_eq!(outcome, TraversalOutcome::Completed);
    assert_eq!(
        log,
        vec![
            "enter:Document",
            "enter:type T",
            "enter:field a",
            "enter:name Int",
            "enter:field b",
            "enter:name Int",
            "enter:field c",
            "enter:name Int",
        ],
    );
}

#[test]
fn post_order_visits_children_first() {
    let (_, log) = run(Traverser::post_order(), &mut Recorder::new(), "type T { a: Int b: ID }");
    assert_eq!(
        log,
        vec![
            "leave:name Int",
            "leave:field a",
            "leave:name ID",
            "leave:field b",
            "leave:type T",
            "leave:Document",
        ],
    );
}

#[test]
fn depth_first_pairs_enter_and_leave() {
    let (_, log) = run(Traverser::depth_first(), &mut Recorder::new(), "type T { a: Int }");
    assert_eq!(
        log,
        vec![
            "enter:Document",
            "enter:type T",
            "enter:field a",
            "enter:name Int",
            "leave:name Int",
            "leave:field a",
            "leave:type T",
            "leave:Document",
        ],
    );
}

#[test]
fn skip_on_enter_skips_the_subtree_but_still_leaves() {
    let mut recorder = Recorder::new();
    recorder.skip = Some("field a");
    let (outcome, log) = run(Traverser::depth_first(), &mut recorder, "type T { a: Int b: ID }");

    assert_eq!(outcome, TraversalOutcome::Completed);
    assert_eq!(
        log,
        vec![
            "enter:Document",
            "enter:type T",
            "enter:field a",
            "leave:field a",
            "enter:field b",
            "enter:name ID",
            "leave:name ID",
            "leave:field b",
            "leave:type T",
            "leave:Document",
        ],
    );
}

#[test]
fn abort_stops_everything() {
    let mut recorder = Recorder::new();
    recorder.abort = Some("field b");
    let (outcome, log) = run(
        Traverser::depth_first(),
        &mut recorder,
        "type T { a: Int b: Int c: Int }",
    );

    assert_eq!(outcome, TraversalOutcome::Aborted);
    assert_eq!(log.last().map(String::as_str), Some("enter:field b"));
    assert!(!log.iter().any(|entry| entry.contains("field c")));
    assert!(!log.iter().any(|entry| entry.starts_with("leave:type")));
}

#[test]
fn abort_from_leave_stops_everything() {
    let mut recorder = Recorder::new();
    recorder.abort = Some("field a");
    let (outcome, log) = run(Traverser::post_order(), &mut recorder, "type T { a: Int b: Int }");

    assert_eq!(outcome, TraversalOutcome::Aborted);
    assert_eq!(log, vec!["leave:name Int", "leave:field a"]);
}

struct PositionRecorder;

impl Visitor<Vec<(NodeKind, Option<&'static str>, Option<usize>, usize, Option<NodeKind>)>>
    for PositionRecorder
{
    fn enter(
        &mut self,
        ctx: &mut TraverserContext<
            '_,
            Vec<(NodeKind, Option<&'static str>, Option<usize>, usize, Option<NodeKind>)>,
        >,
    ) -> TraversalControl {
        assert_eq!(ctx.phase(), TraversalPhase::Enter);
        assert_eq!(ctx.parents().len(), ctx.depth());
        let entry = (
            ctx.node().kind(),
            ctx.key(),
            ctx.index(),
            ctx.depth(),
            ctx.parent().map(Node::kind),
        );
        ctx.accumulator_mut().push(entry);
        TraversalControl::Continue
    }
}

#[test]
fn context_reports_position_in_parent() {
    let root = Node::from(convert_clean("type T @a @b { f: [Int] }"));
    let mut positions = vec![];
    Traverser::pre_order().traverse(&root, &mut PositionRecorder, &mut positions);

    assert_eq!(
        positions,
        vec![
            (NodeKind::Document, None, None, 0, None),
            (
                NodeKind::ObjectTypeDefinition,
                Some(child_keys::DEFINITIONS),
                Some(0),
                1,
                Some(NodeKind::Document),
            ),
            (
                NodeKind::Directive,
                Some(child_keys::DIRECTIVES),
                Some(0),
                2,
                Some(NodeKind::ObjectTypeDefinition),
            ),
            (
                NodeKind::Directive,
                Some(child_keys::DIRECTIVES),
                Some(1),
                2,
                Some(NodeKind::ObjectTypeDefinition),
            ),
            (
                NodeKind::FieldDefinition,
                Some(child_keys::FIELDS),
                Some(0),
                2,
                Some(NodeKind::ObjectTypeDefinition),
            ),
            (
                NodeKind::ListType,
                Some(child_keys::TYPE),
                Some(0),
                3,
                Some(NodeKind::FieldDefinition),
            ),
            (
                NodeKind::TypeName,
                Some(child_keys::TYPE),
                Some(0),
                4,
                Some(NodeKind::ListType),
            ),
        ],
    );
}

struct DepthCounter;

impl Visitor<usize> for DepthCounter {
    fn enter(&mut self, ctx: &mut TraverserContext<'_, usize>) -> TraversalControl {
        let depth = ctx.depth();
        let deepest = ctx.accumulator_mut();
        *deepest = (*deepest).max(depth);
        TraversalControl::Continue
    }
}

#[test]
fn deep_trees_do_not_need_deep_recursion() {
    let mut ty = Type::Named(Arc::new(TypeName {
        name: "Int".to_string(),
        ..Default::default()
    }));
    for _ in 0..1_000 {
        ty = Type::List(Arc::new(ListType {
            item_type: ty,
            ..Default::default()
        }));
    }

    let mut deepest = 0;
    let outcome = Traverser::pre_order().traverse(&Node::from(ty), &mut DepthCounter, &mut deepest);
    assert_eq!(outcome, TraversalOutcome::Completed);
    assert_eq!(deepest, 1_000);
}

#[test]
fn traverse_all_shares_the_accumulator() {
    let roots = vec![
        Node::from(convert_clean("scalar A")),
        Node::from(convert_clean("scalar B")),
    ];
    let mut log = vec![];
    Traverser::pre_order().traverse_all(&roots, &mut Recorder::new(), &mut log);
    assert_eq!(
        log,
        vec![
            "enter:Document",
            "enter:ScalarTypeDefinition",
            "enter:Document",
            "enter:ScalarTypeDefinition",
        ],
    );
}
