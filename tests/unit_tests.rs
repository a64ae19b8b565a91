// Unit tests for Penguin Predict

use penguin_predict::core::{Classifier, Estimator, FeatureRow, QUERY_COLUMNS};
use penguin_predict::models::{species_label, Island, PenguinMeasurements, PredictForm, Sex};
use penguin_predict::{ModelError, ModelStore, PredictError};

fn measurements(bill: f64, depth: f64, flipper: f64, island: Island) -> PenguinMeasurements {
    PenguinMeasurements {
        bill_length_mm: bill,
        bill_depth_mm: depth,
        flipper_length_mm: flipper,
        body_mass_g: 4000.0,
        island,
        sex: Sex::Female,
        year: "2007".to_string(),
    }
}

fn bundled_model() -> ModelStore {
    let model: Classifier =
        serde_json::from_str(include_str!("../model/penguin_model.json")).expect("model json");
    let columns: Vec<String> =
        serde_json::from_str(include_str!("../model/penguin_model_columns.json")).expect("columns json");
    ModelStore::new(model, columns).expect("consistent artifacts")
}

#[test]
fn test_bundled_columns_match_query_layout() {
    let model = bundled_model();
    assert_eq!(model.columns(), QUERY_COLUMNS.map(String::from).as_slice());
}

#[test]
fn test_reindex_length_equals_column_count() {
    let row = FeatureRow::from_measurements(&measurements(40.0, 18.0, 190.0, Island::Dream));
    let columns = ["island_Biscoe", "sex_male", "bill_length_mm", "extra", "island_Dream"];
    let x = row.reindex(&columns);
    assert_eq!(x.len(), columns.len());
    assert_eq!(x, vec![0.0, 0.0, 40.0, 0.0, 1.0]);
}

#[test]
fn test_bundled_model_decision_paths() {
    let model = bundled_model();
    let cases = [
        (measurements(38.8, 17.6, 191.0, Island::Biscoe), "Adelie"),
        (measurements(50.0, 19.5, 196.0, Island::Dream), "Chinstrap"),
        (measurements(44.0, 18.0, 196.0, Island::Torgersen), "Adelie"),
        (measurements(48.7, 14.1, 210.0, Island::Biscoe), "Gentoo"),
        (measurements(52.0, 18.8, 212.0, Island::Dream), "Chinstrap"),
    ];
    for (penguin, expected) in cases {
        let code = model.predict(&penguin).unwrap();
        assert_eq!(species_label(code), expected, "for {:?}", penguin);
    }
}

#[test]
fn test_form_to_prediction() {
    let form = PredictForm {
        bill_length: Some("46.1".to_string()),
        bill_depth: Some("13.2".to_string()),
        flipper_length: Some("211".to_string()),
        body_mass: Some("4500".to_string()),
        island: Some("Biscoe".to_string()),
        sex: Some("female".to_string()),
        year: Some("2008".to_string()),
    };
    let penguin = form.into_measurements().unwrap();
    assert_eq!(species_label(bundled_model().predict(&penguin).unwrap()), "Gentoo");
}

#[test]
fn test_unknown_class_code_renders_unknown_label() {
    let model = Classifier {
        classes: vec![7],
        estimator: Estimator::LogisticRegression {
            coef: vec![vec![0.0; 9]],
            intercept: vec![0.0],
        },
    };
    let columns = QUERY_COLUMNS.iter().map(|c| c.to_string()).collect();
    let store = ModelStore::new(model, columns).unwrap();
    let code = store.predict(&measurements(40.0, 18.0, 190.0, Island::Biscoe)).unwrap();
    assert_eq!(species_label(code), "Không xác định");
}

#[test]
fn test_model_error_surfaces_as_generic_message() {
    let err = PredictError::from(ModelError::CyclicTree);
    assert_eq!(err.user_message(), "Đã xảy ra lỗi: decision tree does not reach a leaf");
}
