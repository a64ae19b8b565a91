// Criterion benchmarks for Penguin Predict

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use penguin_predict::core::{Classifier, DecisionTree, Estimator, FeatureRow, QUERY_COLUMNS};
use penguin_predict::models::{Island, PenguinMeasurements, Sex};
use penguin_predict::ModelStore;

fn create_penguin(id: usize) -> PenguinMeasurements {
    PenguinMeasurements {
        bill_length_mm: 35.0 + (id % 20) as f64,
        bill_depth_mm: 13.0 + (id % 8) as f64,
        flipper_length_mm: 175.0 + (id % 50) as f64,
        body_mass_g: 3000.0 + (id % 30) as f64 * 100.0,
        island: match id % 3 {
            0 => Island::Biscoe,
            1 => Island::Dream,
            _ => Island::Torgersen,
        },
        sex: if id % 2 == 0 { Sex::Female } else { Sex::Male },
        year: (2007 + id % 3).to_string(),
    }
}

fn columns() -> Vec<String> {
    QUERY_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn bundled_store() -> ModelStore {
    let model: Classifier = serde_json::from_str(include_str!("../model/penguin_model.json")).unwrap();
    ModelStore::new(model, columns()).unwrap()
}

fn forest_store(n_trees: usize) -> ModelStore {
    let model: Classifier = serde_json::from_str(include_str!("../model/penguin_model.json")).unwrap();
    let tree: DecisionTree = match model.estimator {
        Estimator::DecisionTree(tree) => tree,
        _ => unreachable!("bundled model is a single tree"),
    };
    let forest = Classifier {
        classes: model.classes,
        estimator: Estimator::RandomForest {
            trees: vec![tree; n_trees],
        },
    };
    ModelStore::new(forest, columns()).unwrap()
}

fn bench_feature_row(c: &mut Criterion) {
    let penguin = create_penguin(7);
    let cols = columns();
    c.bench_function("feature_row_reindex", |b| {
        b.iter(|| FeatureRow::from_measurements(black_box(&penguin)).reindex(black_box(&cols)));
    });
}

fn bench_tree_predict(c: &mut Criterion) {
    let store = bundled_store();
    let penguins: Vec<_> = (0..100).map(create_penguin).collect();
    c.bench_function("decision_tree_predict_100", |b| {
        b.iter(|| {
            for penguin in &penguins {
                black_box(store.predict(black_box(penguin)).unwrap());
            }
        });
    });
}

fn bench_forest_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_forest_predict");
    let penguin = create_penguin(11);

    for n_trees in [10, 100, 500].iter() {
        let store = forest_store(*n_trees);
        group.bench_with_input(BenchmarkId::from_parameter(n_trees), n_trees, |b, _| {
            b.iter(|| store.predict(black_box(&penguin)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_feature_row, bench_tree_predict, bench_forest_predict);
criterion_main!(benches);
