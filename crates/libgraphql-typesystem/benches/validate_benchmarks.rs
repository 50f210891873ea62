use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_typesystem::Schema;
use libgraphql_typesystem::SchemaBuilder;
use libgraphql_typesystem::descriptor::ConfigValue;
use libgraphql_typesystem::descriptor::Descriptor;
use libgraphql_typesystem::descriptor::FieldProducer;
use libgraphql_typesystem::descriptor::keys;
use libgraphql_typesystem::types::FieldSetDeclaration;
use libgraphql_typesystem::types::ObjectType;
use libgraphql_typesystem::types::TypeRef;

/// A ring of `type_count` object types where each type points at the next
/// one (and at itself) through deferred fields.
fn ring_schema(type_count: usize) -> SchemaBuilder {
    let mut builder = Schema::builder();
    for idx in 0..type_count {
        let next = format!("Node{}", (idx + 1) % type_count);
        let this = format!("Node{idx}");
        let self_name = this.clone();
        let fields = FieldSetDeclaration::map([
            ("id", ConfigValue::from(TypeRef::non_null(TypeRef::named("ID")))),
            ("label", Descriptor::new()
                .with(keys::TYPE, "String")
                .with(keys::ARGS, Descriptor::new().with("locale", "String"))
                .into()),
            ("next", FieldProducer::new(move || {
                TypeRef::named(&next).into()
            }).into()),
            ("siblings", FieldProducer::new(move || {
                TypeRef::list(TypeRef::named(&self_name)).into()
            }).into()),
        ]);
        if let Err(err) = builder.add_type(ObjectType::new(this, fields)) {
            panic!("failed to register a benchmark type: {err}");
        }
    }
    builder
}

// ─── Group 1: Build + Validate ───────────────────────────

fn build_and_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_and_validate");

    for type_count in [10, 100, 1_000] {
        group.throughput(Throughput::Elements(type_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(type_count),
            &type_count,
            |b, &type_count| {
                b.iter_with_setup(
                    || ring_schema(type_count),
                    |builder| black_box(builder.build()),
                )
            },
        );
    }

    group.finish();
}

// ─── Group 2: Field Lookup ───────────────────────────────

fn field_lookup(c: &mut Criterion) {
    let schema = match ring_schema(100).build() {
        Ok(schema) => schema,
        Err(err) => panic!("benchmark schema failed to build: {err}"),
    };

    c.bench_function("field_lookup", |b| {
        b.iter(|| {
            let node = schema.get_type(black_box("Node42"))
                .and_then(|type_| type_.as_object());
            black_box(node.map(|node| node.field("siblings")))
        })
    });
}

criterion_group!(
    benches,
    build_and_validate,
    field_lookup,
);
criterion_main!(benches);
