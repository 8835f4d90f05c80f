//! Client-side text metrics.
//!
//! Structural statistics computed locally for immediate feedback while the
//! user is still typing, before anything is sent to the service. No scoring
//! happens here; the backend owns all similarity and AI-likelihood analysis.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

static PARAGRAPH_SPLIT: OnceLock<Regex> = OnceLock::new();

/// Blank-line separator: one or more newlines with optional whitespace between.
fn paragraph_split() -> &'static Regex {
    PARAGRAPH_SPLIT.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"))
}

/// Structural statistics for a single text input.
///
/// Recomputed wholesale on every change; there is no incremental state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    /// Case-insensitive distinct word count.
    pub unique_word_count: usize,
    /// Mean word length in characters, rounded to two decimals.
    pub avg_word_length: f64,
    /// Mean words per sentence, rounded to two decimals.
    pub avg_sentence_length: f64,
}

/// Compute structural metrics for `text`.
///
/// Returns `None` for empty or whitespace-only input. This runs on every
/// text change, so absence of text is routine rather than an error.
pub fn estimate(text: &str) -> Option<TextMetrics> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let words: Vec<&str> = trimmed.split_whitespace().collect();
    let word_count = words.len();

    let sentence_count = text
        .split(['.', '!', '?'])
        .filter(|fragment| !fragment.trim().is_empty())
        .count();

    let paragraph_count = paragraph_split()
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count();

    let unique_words: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = round2(total_chars as f64 / word_count as f64);

    // A fragment with no sentence terminator yields zero sentences; report
    // the whole input as a single run of words instead of dividing by zero.
    let avg_sentence_length = if sentence_count == 0 {
        word_count as f64
    } else {
        round2(word_count as f64 / sentence_count as f64)
    };

    Some(TextMetrics {
        word_count,
        sentence_count,
        paragraph_count,
        unique_word_count: unique_words.len(),
        avg_word_length,
        avg_sentence_length,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
