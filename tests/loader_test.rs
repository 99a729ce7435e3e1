use env_logger::{Builder, Env};
use foliar::{AnalysisMode, Analyzer, ClassifierHandle, LoadState, RuntimeConfig};
use std::io::Write;

// Initialize test logger
fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn")).try_init();
}

#[test]
fn test_missing_artifact_enters_demo_mode() {
    init();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.onnx");

    let handle = ClassifierHandle::initialize(&path, &RuntimeConfig::default());

    assert!(!handle.is_loaded());
    assert_eq!(handle.state(), &LoadState::Missing);
    assert_eq!(
        handle.status_message(),
        "Model file not found. Running in demo mode with simulated results."
    );

    // The analyzer keeps serving simulated diagnoses.
    let analyzer = Analyzer::new(handle);
    let diagnosis = analyzer.analyze(&image::DynamicImage::new_rgb8(64, 64));
    assert_eq!(diagnosis.mode, AnalysisMode::Simulated);
}

#[test]
fn test_corrupt_artifact_reports_failure() -> Result<(), Box<dyn std::error::Error>> {
    init();
    let mut file = tempfile::Builder::new().suffix(".onnx").tempfile()?;
    file.write_all(b"this is definitely not an onnx model")?;

    let handle = ClassifierHandle::initialize(file.path(), &RuntimeConfig::default());

    assert!(!handle.is_loaded());
    assert!(matches!(handle.state(), LoadState::Failed(_)));
    assert!(handle.status_message().starts_with("Could not load model:"));

    // Load failure still leaves a working demo-mode analyzer.
    let analyzer = Analyzer::new(handle);
    let diagnosis = analyzer.analyze(&image::DynamicImage::new_rgb8(64, 64));
    assert!(diagnosis.is_simulated());
    Ok(())
}

#[test]
fn test_handle_records_artifact_path() {
    init();
    let handle = ClassifierHandle::initialize("models/plant_disease_model.onnx", &RuntimeConfig::default());
    assert!(handle.path().ends_with("plant_disease_model.onnx"));
}
