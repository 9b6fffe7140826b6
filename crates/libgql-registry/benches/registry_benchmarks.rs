use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgql_ast::ast::Document;
use libgql_ast::parse_and_convert;
use libgql_registry::CompositeRegistryBuilder;

/// One document per type plus one extension document per type, delivered
/// extensions first so every base arrives after its extension.
fn synthetic_documents(type_count: usize) -> Vec<Document> {
    let extensions = (0..type_count).map(|idx| {
        parse_and_convert(
            &format!("extend type Type{idx} @tagged {{ extra: [String!] }}"),
            Some(format!("ext{idx}.graphql").as_str()),
        )
    });
    let bases = (0..type_count).map(|idx| {
        parse_and_convert(
            &format!(
                "type Type{idx} implements Node {{ id: ID! name(locale: String = \"en\"): String }}",
            ),
            Some(format!("type{idx}.graphql").as_str()),
        )
    });
    extensions.chain(bases).collect()
}

fn registry_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry_build");

    for type_count in [10, 100, 1000] {
        let documents = synthetic_documents(type_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &documents,
            |b, documents| {
                b.iter(|| {
                    let mut builder = CompositeRegistryBuilder::new();
                    for document in documents {
                        builder.add_document(black_box(document));
                    }
                    black_box(builder.build())
                })
            },
        );
    }

    group.finish();
}

fn merged_lookup(c: &mut Criterion) {
    let mut builder = CompositeRegistryBuilder::new();
    for document in &synthetic_documents(1000) {
        builder.add_document(document);
    }
    let registry = builder.build().registry;

    c.bench_function("merged_type_definition", |b| {
        b.iter(|| black_box(registry.merged_type_definition(black_box("Type500"))))
    });
}

criterion_group!(benches, registry_build, merged_lookup);
criterion_main!(benches);
