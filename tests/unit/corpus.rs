//! Corpus files on disk.

use levdict::{load_corpus, CharRange, CorpusOptions, Error, RejectReason};

use super::common::corpus_file;

#[test]
fn test_load_normalizes_and_sorts() {
    let file = corpus_file(&["Hedgehog", "aardvark", "", "EAGLE", "aardvark"]);
    let corpus = load_corpus(file.path(), &CorpusOptions::default()).unwrap();
    assert_eq!(
        corpus.dictionary.to_strings(),
        vec!["aardvark", "eagle", "hedgehog"]
    );
    assert!(corpus.rejected.is_empty());
}

#[test]
fn test_rejected_lines_are_reported() {
    let file = corpus_file(&["duck", "rubber duck", "x-ray", "goose"]);
    let options = CorpusOptions {
        alphabet: CharRange::LOWERCASE_ASCII,
        ..CorpusOptions::default()
    };
    let corpus = load_corpus(file.path(), &options).unwrap();
    assert_eq!(corpus.dictionary.to_strings(), vec!["duck", "goose"]);

    let reasons: Vec<(usize, &RejectReason)> = corpus
        .rejected
        .iter()
        .map(|r| (r.line, &r.reason))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (2, &RejectReason::MultipleTokens),
            (3, &RejectReason::OutsideAlphabet { symbol: '-' }),
        ]
    );
}

#[test]
fn test_missing_file_is_a_corpus_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let err = load_corpus(&path, &CorpusOptions::default()).unwrap_err();
    match err {
        Error::Corpus { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_rejections_serialize_for_json_output() {
    let file = corpus_file(&["two words"]);
    let corpus = load_corpus(file.path(), &CorpusOptions::default()).unwrap();
    let json = serde_json::to_value(&corpus.rejected).unwrap();
    assert_eq!(json[0]["line"], 1);
    assert_eq!(json[0]["reason"]["kind"], "multiple_tokens");
}
