use criterion::{Criterion, criterion_group, criterion_main};
use resfix::{CandidateIndex, rewrite_text};
use std::hint::black_box;

fn build_index(file_count: usize) -> CandidateIndex {
    CandidateIndex::from_paths((0..file_count).map(|i| match i % 3 {
        0 => format!("res://Scripts/mod_{}/Node{}.gd", i % 7, i),
        1 => format!("res://VoxelToolFiles/res_{}.tres", i),
        _ => format!("res://levels/part_{}/Node{}.gd", i % 5, i - 2),
    }))
}

fn build_source(refs: usize) -> String {
    let mut src = String::from("extends Node\n\n");
    for i in 0..refs {
        match i % 4 {
            0 => src.push_str(&format!("const N{} = preload(\"res://old/Node{}.gd\")\n", i, i)),
            1 => src.push_str(&format!("var r{} = load('res://blocks/res_{}.tres')\n", i, i)),
            2 => src.push_str(&format!("const M{} = preload(\"./Node{}.gd\")\n", i, i - 2)),
            _ => src.push_str(&format!("[ext_resource path=\"res://x/res_{}.tres\"]\n", i - 2)),
        }
    }
    src.push_str("var mesher = \"res://blocks/mesher.tres\"\n");
    src
}

fn rewrite_benchmark(c: &mut Criterion) {
    let index = build_index(3000);
    let small = build_source(20);
    let large = build_source(1000);

    let mut group = c.benchmark_group("rewrite");
    group.sample_size(20);

    group.bench_function("20_refs", |b| {
        b.iter(|| rewrite_text(black_box(&small), black_box(&index)))
    });

    group.bench_function("1000_refs", |b| {
        b.iter(|| rewrite_text(black_box(&large), black_box(&index)))
    });

    group.finish();
}

fn index_benchmark(c: &mut Criterion) {
    c.bench_function("index_3000_paths", |b| b.iter(|| build_index(black_box(3000))));
}

criterion_group!(benches, rewrite_benchmark, index_benchmark);
criterion_main!(benches);
