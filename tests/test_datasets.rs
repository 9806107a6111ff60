//! Integration test: dataset catalog and loaders

use dataset_voyage::datasets::{self, DatasetName};
use dataset_voyage::VoyageError;

#[test]
fn test_reference_shapes() {
    let expected = [
        (DatasetName::Iris, (150, 4)),
        (DatasetName::BreastCancer, (569, 30)),
        (DatasetName::Wine, (178, 13)),
        (DatasetName::Digits, (1797, 64)),
        (DatasetName::Diabetes, (442, 10)),
    ];

    for (name, shape) in expected {
        let ds = datasets::load(name).unwrap();
        assert_eq!(ds.shape(), shape, "shape of {}", name);
        assert_eq!(ds.targets().len(), shape.0, "label count of {}", name);
        assert_eq!(ds.feature_names().len(), shape.1, "feature names of {}", name);
    }
}

#[test]
fn test_class_counts() {
    assert_eq!(datasets::load(DatasetName::Iris).unwrap().n_classes(), 3);
    assert_eq!(datasets::load(DatasetName::BreastCancer).unwrap().n_classes(), 2);
    assert_eq!(datasets::load(DatasetName::Wine).unwrap().n_classes(), 3);
    assert_eq!(datasets::load(DatasetName::Digits).unwrap().n_classes(), 10);
    // Every distinct progression score is its own class
    assert!(datasets::load(DatasetName::Diabetes).unwrap().n_classes() > 100);
}

#[test]
fn test_iris_class_balance() {
    let ds = datasets::load(DatasetName::Iris).unwrap();
    for class in ds.classes() {
        let count = ds.targets().iter().filter(|&&t| t == class).count();
        assert_eq!(count, 50);
    }
}

#[test]
fn test_first_rows_match_reference_tables() {
    let row0 = |name| datasets::load(name).unwrap().features().row(0).to_vec();

    // Iris is stored as f32 upstream
    for (got, want) in row0(DatasetName::Iris).iter().zip([5.1, 3.5, 1.4, 0.2]) {
        assert!((got - want).abs() < 1e-6, "{} != {}", got, want);
    }
    assert_eq!(
        row0(DatasetName::Wine),
        vec![14.23, 1.71, 2.43, 15.6, 127.0, 2.8, 3.06, 0.28, 2.29, 5.64, 1.04, 3.92, 1065.0]
    );
    assert_eq!(row0(DatasetName::Digits)[..6], [0.0, 0.0, 5.0, 13.0, 9.0, 1.0]);
}

#[test]
fn test_load_by_display_name() {
    let ds = datasets::load_by_name("Handwritten digits").unwrap();
    assert_eq!(ds.name(), DatasetName::Digits);

    let ds = datasets::load_by_name("Wine dataset").unwrap();
    assert_eq!(ds.summary().key, "wine");
}

#[test]
fn test_unknown_dataset_fails_fast() {
    let err = datasets::load_by_name("Boston housing").unwrap_err();
    assert!(matches!(err, VoyageError::UnknownDataset(_)));
    assert_eq!(err.to_string(), "Unknown dataset: Boston housing");
}

#[test]
fn test_loading_is_repeatable() {
    let a = datasets::load(DatasetName::Wine).unwrap();
    let b = datasets::load(DatasetName::Wine).unwrap();
    assert_eq!(a.features(), b.features());
    assert_eq!(a.targets(), b.targets());
}

#[test]
fn test_summary_matches_dataset() {
    for name in DatasetName::ALL {
        let ds = datasets::load(name).unwrap();
        let summary = ds.summary();
        assert_eq!(summary.name, name.display_name());
        assert_eq!((summary.n_samples, summary.n_features), ds.shape());
        assert_eq!(summary.n_classes, ds.n_classes());
    }
}
