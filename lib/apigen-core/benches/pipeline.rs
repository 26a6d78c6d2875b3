use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use apigen_core::{
    Client, GeneratorOptions, Model, NamingMode, Operation, Service, partition,
    post_process_client, resolve_imports, rewrite_property,
};

/// A client with `size` models and services, each model importing its neighbours.
fn synthetic_client(size: usize) -> Client {
    (0..size).fold(Client::new("http://localhost", "1.0"), |client, index| {
        let model = Model::interface(format!("domain{}.Model{index}", index % 7))
            .with_property(Model::reference("next", format!("domain{}.Model{}", (index + 1) % 7, index + 1)))
            .with_import(format!("domain{}.Model{}", (index + 1) % 7, index + 1))
            .with_import(format!("domain{}.Model{}", (index + 2) % 7, index + 2))
            .with_import(format!("domain{}.Model{}", (index + 1) % 7, index + 1));
        let service = Service::new(format!("resource{index}"))
            .with_operation(Operation::new(format!("resource{index}Get")))
            .with_operation(Operation::new(format!("resource{index}List")))
            .with_operation(Operation::new("get"));
        client.with_model(model).with_service(service)
    })
}

fn nested_property(depth: usize) -> Model {
    (0..depth).fold(Model::reference("leaf", "pet.Leaf"), |child, level| {
        Model::interface(format!("level{level}"))
            .with_base(format!("pet.Level{level}"))
            .with_property(child)
            .with_property(Model::reference("tag", "pet.Tag"))
    })
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for size in [10, 100, 1_000] {
        let client = synthetic_client(size);
        let flat = GeneratorOptions::default();
        let qualified = GeneratorOptions::default().with_fully_qualified_names(true);

        group.bench_function(format!("post_process_flat_{size}"), |b| {
            b.iter(|| post_process_client(black_box(&client), black_box(&flat)));
        });

        group.bench_function(format!("post_process_qualified_{size}"), |b| {
            b.iter(|| post_process_client(black_box(&client), black_box(&qualified)));
        });

        if let Ok(processed) = post_process_client(&client, &qualified) {
            group.bench_function(format!("partition_{size}"), |b| {
                b.iter(|| partition(black_box(&processed), true));
            });
        }
    }

    group.finish();
}

fn benchmark_helpers(c: &mut Criterion) {
    let mut group = c.benchmark_group("helpers");

    let imports = (0..200)
        .map(|index| format!("pet.Model{}", index % 50))
        .collect::<Vec<_>>();
    group.bench_function("resolve_imports", |b| {
        b.iter(|| resolve_imports(black_box(&imports), "models", NamingMode::Flat, Some("pet.Model0")));
    });

    let property = nested_property(64);
    group.bench_function("rewrite_property", |b| {
        b.iter(|| rewrite_property(black_box(&property), "models", NamingMode::FullyQualified));
    });

    group.finish();
}

criterion_group!(benches, benchmark_pipeline, benchmark_helpers);
criterion_main!(benches);
