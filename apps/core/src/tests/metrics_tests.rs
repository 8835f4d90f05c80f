//! Structural text metrics properties over realistic inputs.
//!
//! Unit-level cases live next to the estimator; these check the contract
//! properties across larger, mixed-shape texts.

use crate::metrics::estimate;

const SAMPLES: &[&str] = &[
    "A single sentence with seven words here.",
    "Two sentences. The second one is a little longer than the first!",
    "Does punctuation matter? Yes. It does!\n\nAnd paragraphs matter too.\n\nThree of them.",
    "word",
    "repeat repeat repeat REPEAT Repeat",
];

#[test]
fn test_word_count_matches_whitespace_tokens() {
    for sample in SAMPLES {
        let metrics = estimate(sample).unwrap();
        assert_eq!(
            metrics.word_count,
            sample.split_whitespace().count(),
            "sample: {:?}",
            sample
        );
    }
}

#[test]
fn test_unique_count_never_exceeds_word_count() {
    for sample in SAMPLES {
        let metrics = estimate(sample).unwrap();
        assert!(
            metrics.unique_word_count <= metrics.word_count,
            "sample: {:?}",
            sample
        );
    }
}

#[test]
fn test_repeated_words_collapse_case_insensitively() {
    let metrics = estimate("repeat repeat repeat REPEAT Repeat").unwrap();
    assert_eq!(metrics.word_count, 5);
    assert_eq!(metrics.unique_word_count, 1);
}

#[test]
fn test_multi_paragraph_document() {
    let text = "The opening paragraph sets the scene. It has two sentences.\n\n\
                The second paragraph continues! Why not?\n\n\
                A short close.";
    let metrics = estimate(text).unwrap();

    assert_eq!(metrics.paragraph_count, 3);
    assert_eq!(metrics.sentence_count, 5);
    assert_eq!(metrics.word_count, 19);
    assert!(metrics.avg_word_length > 0.0);
    assert_eq!(metrics.avg_sentence_length, 3.8);
}

#[test]
fn test_estimation_is_deterministic() {
    let text = "Determinism means the same input always yields the same metrics.";
    assert_eq!(estimate(text), estimate(text));
}
