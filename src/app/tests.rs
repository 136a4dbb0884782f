use super::{App, MessageKind, Phase, COMPUTING_MSG};
use crate::{
    model::RegressionModel,
    predictor::{IdentityPredictor, ValidationPolicy, MISSING_INPUT_WARNING},
    seq::features::feature_column_names,
};
use serde_json::json;

// score = 50 + 10 * gravy_A + 10 * gravy_B
fn gravy_model(names: Vec<String>) -> RegressionModel {
    let mut coefficients = vec![0.0; names.len()];
    coefficients[0] = 10.0;
    coefficients[1] = 10.0;
    RegressionModel::from_value(json!({
        "format_version": 1,
        "feature_names": names,
        "model": { "kind": "linear", "intercept": 50.0, "coefficients": coefficients }
    }))
    .expect("model")
}

fn test_app(policy: ValidationPolicy) -> App {
    let predictor = IdentityPredictor::new(gravy_model(feature_column_names()), policy);
    App::new(predictor, None)
}

#[test]
fn test_new_app_is_idle() {
    let app = test_app(ValidationPolicy::Permissive);
    assert_eq!(app.phase(), Phase::Idle);
    assert!(app.result_line().is_none());
    assert!(app.banner().is_none());
    assert_eq!(app.current_message().message, "");
}

#[test]
fn test_begin_prediction_enters_computing() {
    let mut app = test_app(ValidationPolicy::Permissive);
    app.begin_prediction();
    assert!(app.is_computing());
    assert_eq!(app.current_message().message, COMPUTING_MSG);
    app.predict("MKTAY", "MKTAY");
    assert_eq!(app.phase(), Phase::Idle);
}

#[test]
fn test_predict_renders_score() {
    let mut app = test_app(ValidationPolicy::Permissive);
    // GRAVY(MKTAY) = (1.9 - 3.9 - 0.7 + 1.8 - 1.3) / 5 = -0.44
    app.predict("MKTAY", "mktay");
    assert_eq!(
        app.result_line().as_deref(),
        Some("Predicted Identity Score: 41.20%")
    );
    assert_eq!(app.current_message().message, "");
}

#[test]
fn test_missing_input_warns() {
    let mut app = test_app(ValidationPolicy::Permissive);
    app.predict("MKTAY", "MKTAY");
    assert!(app.result_line().is_some());
    app.predict("MKTAY", "");
    assert!(app.result_line().is_none());
    let msg = app.current_message();
    assert_eq!(msg.kind, MessageKind::Warning);
    assert_eq!(msg.message, MISSING_INPUT_WARNING);
}

#[test]
fn test_degenerate_input_is_accepted() {
    let mut app = test_app(ValidationPolicy::Permissive);
    app.predict("12345", "!!!");
    // Both descriptor vectors are all zeros, hence just the intercept.
    assert_eq!(
        app.result_line().as_deref(),
        Some("Predicted Identity Score: 50.00%")
    );
}

#[test]
fn test_strict_mode_rejects_degenerate_input() {
    let mut app = test_app(ValidationPolicy::Strict { min_length: 1 });
    app.predict("12345", "MKTAY");
    assert!(app.result_line().is_none());
    let msg = app.current_message();
    assert_eq!(msg.kind, MessageKind::Warning);
    assert!(msg.message.starts_with("Protein A has 0 valid residue(s)"));
}

#[test]
fn test_integration_failure_is_an_error_message() {
    let mut names = feature_column_names();
    names.swap(2, 3);
    let predictor = IdentityPredictor::new(gravy_model(names), ValidationPolicy::Permissive);
    let mut app = App::new(predictor, Some(String::from("~~~")));
    app.predict("MKTAY", "MKTAY");
    assert!(app.result_line().is_none());
    assert_eq!(app.current_message().kind, MessageKind::Error);
    assert_eq!(app.current_message().prefix, "ERROR: ");
    // The app keeps serving.
    app.predict("MKTAY", "");
    assert_eq!(app.current_message().kind, MessageKind::Warning);
    assert_eq!(app.banner(), Some("~~~"));
}
