//! Tree generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis_codegen::{MetadataStore, Platform, TreeGenerator};
use trellis_core::{ComponentKind, Entity};

fn dashboard(sections: usize) -> Entity {
    let mut page = Entity::new("page", ComponentKind::Page).with_classes("flex-col p-6 gap-4");
    for i in 0..sections {
        let card = Entity::new(format!("card-{}", i), ComponentKind::Container)
            .with_classes("rounded-lg shadow-md p-4 bg-white")
            .with_child(
                Entity::new(format!("title-{}", i), ComponentKind::Text)
                    .with_classes("text-lg font-bold")
                    .with_property("text", "Revenue"),
            )
            .with_child(
                Entity::new(format!("chart-{}", i), ComponentKind::Image)
                    .with_classes("w-full h-[180px] object-cover")
                    .with_property("src", "/chart.png"),
            )
            .with_child(
                Entity::new(format!("open-{}", i), ComponentKind::Button)
                    .with_classes("px-4 py-2 rounded bg-blue-600 text-white")
                    .with_property("onClick", "open"),
            );
        page = page.with_child(card);
    }
    page
}

fn generate_web(c: &mut Criterion) {
    let tree = dashboard(50);
    let generator = TreeGenerator::for_platform(Platform::Web);
    c.bench_function("generate_web", |b| b.iter(|| generator.generate(black_box(&tree))));
}

fn generate_native(c: &mut Criterion) {
    let tree = dashboard(50);
    let generator = TreeGenerator::for_platform(Platform::Native);
    c.bench_function("generate_native", |b| b.iter(|| generator.generate(black_box(&tree))));
}

fn generate_with_metadata(c: &mut Criterion) {
    let tree = dashboard(50);
    let generator = TreeGenerator::for_platform(Platform::Web);
    let store = MetadataStore::new();
    c.bench_function("generate_with_metadata", |b| {
        b.iter(|| generator.generate_with_metadata(black_box(&tree), &store))
    });
}

criterion_group!(benches, generate_web, generate_native, generate_with_metadata);
criterion_main!(benches);
