//! Criterion benchmarks for posture-risk.
//!
//! Targets:
//! - classify one cell (20 assets in category) < 0.01ms
//! - full heat map (100 assets, all scored) < 0.5ms
//! - derive recommendations from a full heat map < 0.05ms

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use posture_core::models::{Category, Function};
use posture_risk::{RecommendationDeriver, RiskEngine, VendorCatalog};
use posture_store::AssetStore;

fn make_store(assets: usize) -> AssetStore {
    let mut store = AssetStore::new();
    for i in 0..assets {
        let category = Category::ALL[i % Category::ALL.len()];
        let name = format!("asset-{i}");
        store.add_asset(name.clone(), category, i % 7 == 0).unwrap();
        for (j, function) in Function::ALL.into_iter().enumerate() {
            store.set_score(&name, function, ((i + j) % 5) as u8).unwrap();
        }
    }
    store
}

fn bench_classify(c: &mut Criterion) {
    let store = make_store(100);
    c.bench_function("classify_cell_100_assets", |b| {
        b.iter(|| RiskEngine::classify(black_box(&store), Category::Data, Function::Protect))
    });
}

fn bench_heat_map(c: &mut Criterion) {
    let store = make_store(100);
    c.bench_function("heat_map_100_assets", |b| {
        b.iter(|| RiskEngine::heat_map(black_box(&store)))
    });
}

fn bench_recommendations(c: &mut Criterion) {
    let store = make_store(100);
    let map = RiskEngine::heat_map(&store);
    let catalog = VendorCatalog::builtin();
    let deriver = RecommendationDeriver::default();
    c.bench_function("derive_recommendations", |b| {
        b.iter(|| deriver.derive(black_box(&map), Some(&catalog)))
    });
}

criterion_group!(benches, bench_classify, bench_heat_map, bench_recommendations);
criterion_main!(benches);
