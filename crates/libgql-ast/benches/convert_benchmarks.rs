use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgql_ast::AstNode;
use libgql_ast::ConvertOptions;
use libgql_ast::Node;
use libgql_ast::ParallelTreeTransformer;
use libgql_ast::TransformAction;
use libgql_ast::TransformContext;
use libgql_ast::TreeTransformer;
use libgql_ast::convert_document;
use libgql_syntax::parse_document;

/// Builds a schema with `type_count` object types, each referencing the
/// next one, so larger inputs also produce deeper reference chains.
fn synthetic_schema(type_count: usize) -> String {
    let mut source = String::new();
    for idx in 0..type_count {
        let next = (idx + 1) % type_count;
        source.push_str(&format!(
            "\"\"\"\nType number {idx}.\n\"\"\"\n\
             type Type{idx} implements Node @key(fields: \"id\") {{\n  \
               id: ID!\n  \
               name(locale: String = \"en\"): String\n  \
               next: Type{next}\n  \
               tags(first: Int = 10): [String!]! @deprecated(reason: \"use labels\")\n\
             }}\n\n",
        ));
    }
    source
}

// ─── Group 1: Parse + convert ────────────────────────────

fn parse_and_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_and_convert");

    for type_count in [10, 100, 1000] {
        let source = synthetic_schema(type_count);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &source,
            |b, source| {
                b.iter(|| {
                    let parsed = parse_document(black_box(source), None);
                    black_box(convert_document(
                        &parsed.tree,
                        &ConvertOptions::default(),
                    ))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 2: Convert only ───────────────────────────────

fn convert_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_only");

    for type_count in [10, 100, 1000] {
        let parsed = parse_document(&synthetic_schema(type_count), None);
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &parsed.tree,
            |b, tree| {
                b.iter(|| {
                    black_box(convert_document(
                        black_box(tree),
                        &ConvertOptions::default(),
                    ))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 3: Transform ──────────────────────────────────

fn rename_strings(ctx: &TransformContext<'_>) -> TransformAction {
    match ctx.node() {
        Node::TypeName(type_name) if type_name.name == "String" => {
            TransformAction::Replace(Node::from(type_name.transform(|staged| {
                staged.name = "Text".to_string();
            })))
        },
        _ => TransformAction::Continue,
    }
}

fn transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let parsed = parse_document(&synthetic_schema(1000), None);
    let root = Node::from(convert_document(
        &parsed.tree,
        &ConvertOptions::default(),
    ));

    group.bench_function("sequential", |b| {
        b.iter(|| {
            black_box(TreeTransformer::new(rename_strings).transform(&root))
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            black_box(ParallelTreeTransformer::new(rename_strings).transform(&root))
        })
    });

    group.finish();
}

criterion_group!(benches, parse_and_convert, convert_only, transform);
criterion_main!(benches);
