//! Loading models and classifiers from files

use std::fs;

use qtype_core::model::{EMBEDDED_POS_MODEL, EMBEDDED_SENTENCE_MODEL};
use qtype_core::{Classifier, Config, Error, ModelKind, ModelPaths, ModelProvider, QuestionType};
use tempfile::TempDir;

fn write_models(dir: &TempDir) -> ModelPaths {
    let sentence = dir.path().join("sent.toml");
    let pos = dir.path().join("pos.toml");
    fs::write(&sentence, EMBEDDED_SENTENCE_MODEL).unwrap();
    fs::write(&pos, EMBEDDED_POS_MODEL).unwrap();
    ModelPaths::new(sentence, pos)
}

#[test]
fn test_classifier_from_model_files() {
    let dir = TempDir::new().unwrap();
    let paths = write_models(&dir);

    let config = Config::builder()
        .sentence_model(&paths.sentence)
        .pos_model(&paths.pos)
        .build()
        .unwrap();
    let classifier = Classifier::from_config(&config).unwrap();

    assert_eq!(
        classifier.classify("When will it arrive?").unwrap().labels(),
        &[QuestionType::When]
    );
}

#[test]
fn test_missing_pos_model_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = write_models(&dir);
    fs::remove_file(&paths.pos).unwrap();

    let err = ModelProvider::load(&paths).unwrap_err();
    assert!(err.is_fatal());
    match err {
        Error::ModelLoad { kind, path, .. } => {
            assert_eq!(kind, ModelKind::Pos);
            assert_eq!(path, paths.pos);
        }
        other => panic!("Expected ModelLoad error, got {other:?}"),
    }
}

#[test]
fn test_corrupt_sentence_model_is_fatal() {
    let dir = TempDir::new().unwrap();
    let paths = write_models(&dir);
    fs::write(&paths.sentence, [0xff, 0xfe, 0x00]).unwrap();

    let err = ModelProvider::load(&paths).unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().starts_with("failed to load sentence model"));
}

#[test]
fn test_pos_model_with_unknown_tag_is_invalid() {
    let dir = TempDir::new().unwrap();
    let paths = write_models(&dir);
    fs::write(
        &paths.pos,
        r#"
[metadata]
code = "en"
name = "Broken"

[tagging]
default_tag = "NOUN"

[lexicon]
WP = ["what"]
"#,
    )
    .unwrap();

    match ModelProvider::load(&paths) {
        Err(Error::InvalidModel { kind, reason }) => {
            assert_eq!(kind, ModelKind::Pos);
            assert!(reason.contains("NOUN"));
        }
        other => panic!("Expected InvalidModel error, got {other:?}"),
    }
}

#[test]
fn test_configured_rules_extend_the_table() {
    let dir = TempDir::new().unwrap();
    let paths = write_models(&dir);

    let config = Config::builder()
        .sentence_model(&paths.sentence)
        .pos_model(&paths.pos)
        .rule("WDT", "Which")
        .build()
        .unwrap();
    let classifier = Classifier::from_config(&config).unwrap();

    assert_eq!(classifier.rules().len(), 3);
    assert_eq!(
        classifier.classify("Which one? What else?").unwrap().to_string(),
        "[Which, What]"
    );
}

#[test]
fn test_classifier_is_shareable_across_threads() {
    let classifier = std::sync::Arc::new(Classifier::embedded().unwrap());

    let handles: Vec<_> = ["What?", "Where?", "When?", "Okay."]
        .into_iter()
        .map(|line| {
            let classifier = classifier.clone();
            std::thread::spawn(move || classifier.classify(line).unwrap().to_string())
        })
        .collect();

    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["[What]", "[Where]", "[When]", "[Affirmative]"]);
}
