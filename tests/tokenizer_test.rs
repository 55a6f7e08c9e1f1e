//! Tokenizer Integration Tests
//!
//! Tests for the lemma pipeline and batch tokenization.

use sentiment_corpus::{tokenize, CorpusError, LanguageModel, Pipeline, PipelineConfig, TokenizeOptions};
use tempfile::tempdir;

fn quiet() -> TokenizeOptions {
    TokenizeOptions::quiet()
}

#[test]
fn test_default_options() {
    let options = TokenizeOptions::default();
    assert_eq!(options.batch_size, 512);
    assert_eq!(options.n_jobs, 4);
    assert_eq!(options.character_threshold, 2);
    assert!(options.show_progress);
}

#[test]
fn test_global_tokenize_filters_noise() {
    let out = tokenize(
        &["Visit https://example.com or email me@x.com, I have 42 cats!"],
        &quiet(),
    )
    .unwrap();

    assert_eq!(out.len(), 1);
    let tokens = &out[0];
    assert!(tokens.contains(&"cat".to_string()));
    for excluded in ["42", "https://example.com", "me@x.com", "i", "have", "or", "!"] {
        assert!(!tokens.iter().any(|t| t == excluded), "{} kept in {:?}", excluded, tokens);
    }
    for token in tokens {
        assert_eq!(token, &token.to_lowercase());
        assert!(token.chars().count() >= 2);
    }
}

#[test]
fn test_empty_input() {
    let texts: Vec<String> = Vec::new();
    assert!(tokenize(&texts, &quiet()).unwrap().is_empty());
}

#[test]
fn test_document_and_token_order() {
    let pipeline = Pipeline::new(LanguageModel::bundled());
    let texts = vec![
        "zebras chase lions".to_string(),
        String::new(),
        "lions chase zebras".to_string(),
    ];
    let options = TokenizeOptions {
        batch_size: 1,
        n_jobs: 2,
        ..quiet()
    };

    let out = pipeline.tokenize_batch(&texts, &options).unwrap();
    assert_eq!(out[0], vec!["zebra", "chase", "lion"]);
    assert!(out[1].is_empty());
    assert_eq!(out[2], vec!["lion", "chase", "zebra"]);
}

#[test]
fn test_imdb_markup_is_not_a_token() {
    let pipeline = Pipeline::new(LanguageModel::bundled());
    let out = pipeline.lemmas("Loved it.<br /><br />Brilliant acting &amp; music", 2);
    assert_eq!(out, vec!["love", "brilliant", "act", "music"]);
}

#[test]
fn test_batch_size_does_not_change_result() {
    let pipeline = Pipeline::new(LanguageModel::bundled());
    let texts: Vec<String> = (0..25)
        .map(|i| format!("review {} mentions wonderful stories", i))
        .collect();

    let small = pipeline
        .tokenize_batch(&texts, &TokenizeOptions { batch_size: 3, n_jobs: 4, ..quiet() })
        .unwrap();
    let large = pipeline
        .tokenize_batch(&texts, &TokenizeOptions { batch_size: 512, n_jobs: 1, ..quiet() })
        .unwrap();
    assert_eq!(small, large);
    assert_eq!(small[0], vec!["review", "mention", "wonderful", "story"]);
}

#[test]
fn test_pipeline_from_model_dir_fetches_once() {
    let dir = tempdir().expect("Failed to create temp dir");
    let model_dir = dir.path().join("en_core_web");
    let config = PipelineConfig::with_model_dir(&model_dir);

    let pipeline = Pipeline::from_config(&config).unwrap();
    assert!(model_dir.join(sentiment_corpus::tokenizer::META_FILE).exists());
    assert_eq!(pipeline.lemmas("running dogs", 2), vec!["run", "dog"]);

    // Segunda carga lê do disco
    let again = Pipeline::from_config(&config).unwrap();
    assert_eq!(again.model().meta(), pipeline.model().meta());
}

#[test]
fn test_model_dir_under_a_file_fails_to_fetch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("plain_file");
    std::fs::write(&file, "not a directory").unwrap();

    let config = PipelineConfig::with_model_dir(file.join("sub"));
    let err = Pipeline::from_config(&config).err().expect("fetch should fail");
    assert!(matches!(err, CorpusError::ModelFetch { .. }), "{}", err);
}

#[test]
fn test_corrupt_meta_fails_to_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    LanguageModel::install(dir.path()).unwrap();
    std::fs::write(dir.path().join(sentiment_corpus::tokenizer::META_FILE), "{\"name\": 3").unwrap();

    let config = PipelineConfig::with_model_dir(dir.path());
    let err = Pipeline::from_config(&config).err().expect("load should fail");
    assert!(matches!(err, CorpusError::ModelLoad { .. }), "{}", err);
}
