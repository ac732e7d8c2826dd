use pdf_reader_core::*;
use std::path::PathBuf;

#[test]
fn test_defaults_are_valid() {
    let options = ReaderOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.progress_file, PathBuf::from("progress.json"));
    assert_eq!(options.zoom_step, 1.1);
    assert_eq!(options.initial_scale, 1.0);
    assert_eq!(options.max_scale, None);
}

#[test]
fn test_validation_rejects_bad_zoom_settings() {
    let cases = [
        ReaderOptions {
            zoom_step: 1.0,
            ..Default::default()
        },
        ReaderOptions {
            zoom_step: 0.5,
            ..Default::default()
        },
        ReaderOptions {
            min_scale: 0.0,
            ..Default::default()
        },
        ReaderOptions {
            max_scale: Some(0.01),
            ..Default::default()
        },
        ReaderOptions {
            initial_scale: 0.01,
            ..Default::default()
        },
        ReaderOptions {
            initial_scale: 3.0,
            max_scale: Some(2.0),
            ..Default::default()
        },
        ReaderOptions {
            progress_file: PathBuf::new(),
            ..Default::default()
        },
    ];

    for options in cases {
        match options.validate() {
            Err(ReaderError::Config(_)) => {}
            other => panic!("Expected Config error for {options:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_accepts_scale_respects_bounds() {
    let options = ReaderOptions {
        min_scale: 0.5,
        max_scale: Some(2.0),
        ..Default::default()
    };
    assert!(options.accepts_scale(0.5));
    assert!(options.accepts_scale(2.0));
    assert!(!options.accepts_scale(0.49));
    assert!(!options.accepts_scale(2.01));
    assert!(!options.accepts_scale(f32::NAN));
}

#[test]
fn test_save_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdf-reader.json");

    let options = ReaderOptions {
        progress_file: PathBuf::from("/var/lib/reader/progress.json"),
        zoom_step: 1.25,
        max_scale: Some(6.0),
        ..Default::default()
    };
    options.save(&path).unwrap();

    assert_eq!(ReaderOptions::load(&path).unwrap(), options);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdf-reader.json");
    std::fs::write(&path, r#"{ "zoom_step": 1.2 }"#).unwrap();

    let options = ReaderOptions::load(&path).unwrap();
    assert_eq!(options.zoom_step, 1.2);
    assert_eq!(options.progress_file, PathBuf::from("progress.json"));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let options = ReaderOptions::load_or_default(dir.path().join("absent.json")).unwrap();
    assert_eq!(options, ReaderOptions::default());
}

#[test]
fn test_load_rejects_malformed_or_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pdf-reader.json");

    std::fs::write(&path, "{ zoom").unwrap();
    assert!(matches!(
        ReaderOptions::load_or_default(&path),
        Err(ReaderError::Config(msg)) if msg.contains("Failed to parse config")
    ));

    std::fs::write(&path, r#"{ "zoom_step": 0.9 }"#).unwrap();
    assert!(matches!(
        ReaderOptions::load(&path),
        Err(ReaderError::Config(msg)) if msg.contains("Zoom step")
    ));
}

#[test]
fn test_error_messages_name_the_problem() {
    let err = ReaderError::DocumentOpen {
        path: PathBuf::from("/tmp/a.pdf"),
        reason: "not a PDF".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to open document /tmp/a.pdf: not a PDF");

    let err = ReaderError::Render {
        page_index: 2,
        scale: 8.0,
        reason: "out of memory".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to render page 3 at scale 8.00: out of memory"
    );

    let err = ReaderError::StoreCorrupt {
        path: PathBuf::from("progress.json"),
        reason: "expected value".to_string(),
    };
    assert!(err.to_string().contains("progress.json is unreadable"));
}
