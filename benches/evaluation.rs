use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dataset_voyage::datasets::{self, DatasetName};
use dataset_voyage::pipeline::{evaluate_dataset, EvaluationConfig};
use dataset_voyage::training::{ClassifierKind, ClassifierParams};
use dataset_voyage::visualization::Pca;

fn params_for(kind: ClassifierKind) -> ClassifierParams {
    match kind {
        ClassifierKind::Knn => ClassifierParams::Knn { k: 5 },
        ClassifierKind::Svm => ClassifierParams::Svm { c: 1.0 },
        ClassifierKind::RandomForest => ClassifierParams::RandomForest { max_depth: 8, n_estimators: 50 },
    }
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    group.sample_size(10); // Fewer samples for fitting benchmarks

    let config = EvaluationConfig::default();
    for name in [DatasetName::Iris, DatasetName::Digits] {
        let dataset = datasets::load(name).unwrap();

        for kind in ClassifierKind::ALL {
            let params = params_for(kind);
            group.bench_with_input(
                BenchmarkId::new(kind.key(), name.key()),
                &dataset,
                |b, ds| b.iter(|| evaluate_dataset(black_box(ds), &params, &config).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("pca");

    for name in DatasetName::ALL {
        let dataset = datasets::load(name).unwrap();
        group.bench_with_input(BenchmarkId::new("fit_transform", name.key()), &dataset, |b, ds| {
            b.iter(|| Pca::default().fit_transform(black_box(ds.features())).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluation, bench_projection);
criterion_main!(benches);
