//! Veritext entry point.
//!
//! Terminal client for the remote plagiarism / AI-content analysis service.
//! All scoring happens on the backend; this binary collects input, shows
//! local text metrics for immediate feedback, and renders the returned
//! results.

mod client;
mod config;
mod error;
mod metrics;
mod models;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser, Subcommand};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use client::AnalysisClient;
use config::ClientConfig;
use metrics::TextMetrics;
use models::{fraction_as_percent, score_as_percent, AiDetectionResult, SimilarityScores};

#[derive(Parser)]
#[command(
    name = "veritext",
    version,
    about = "Terminal client for the plagiarism and AI-content analysis service"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two texts and report similarity scores.
    Similarity {
        /// First text, or a path when --from-files is set.
        text1: String,
        /// Second text, or a path when --from-files is set.
        text2: String,
        /// Treat both arguments as file paths and read their contents.
        #[arg(long)]
        from_files: bool,
    },
    /// Check a text or an uploaded file for AI-generated content.
    #[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
    Detect {
        /// Text to analyze.
        text: Option<String>,
        /// Upload a file instead of inline text (.txt, .pdf, .docx, .doc, .csv, .xlsx).
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// List previously generated analysis reports.
    Reports,
    /// Show local structural metrics for a text without contacting the service.
    Metrics {
        /// Text to measure.
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env()?;
    info!("Using analysis service at {}", config.base_url);
    let client = AnalysisClient::new(config)?;

    match cli.command {
        Command::Similarity {
            text1,
            text2,
            from_files,
        } => {
            let (text1, text2) = if from_files {
                let a = tokio::fs::read_to_string(&text1)
                    .await
                    .with_context(|| format!("failed to read {}", text1))?;
                let b = tokio::fs::read_to_string(&text2)
                    .await
                    .with_context(|| format!("failed to read {}", text2))?;
                (a, b)
            } else {
                (text1, text2)
            };
            let scores = client.analyze_similarity(&text1, &text2).await?;
            print_similarity(&scores);
        }
        Command::Detect { text, file } => {
            let result = match (text, file) {
                (Some(text), None) => {
                    // Local metrics first, before any network round trip.
                    if let Some(metrics) = metrics::estimate(&text) {
                        print_metrics(&metrics);
                        println!();
                    }
                    client.detect_ai_text(&text).await?
                }
                (None, Some(path)) => {
                    let filename = path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .context("file path has no usable filename")?
                        .to_string();
                    let content = tokio::fs::read(&path)
                        .await
                        .with_context(|| format!("failed to read {}", path.display()))?;
                    client.detect_ai_file(&filename, &content).await?
                }
                // clap's input group guarantees exactly one of the two.
                _ => unreachable!(),
            };
            print_detection(&result);
        }
        Command::Reports => {
            let reports = client.fetch_reports().await?;
            if reports.is_empty() {
                println!("No reports available.");
            } else {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            }
        }
        Command::Metrics { text } => match metrics::estimate(&text) {
            Some(metrics) => print_metrics(&metrics),
            None => println!("No text to measure."),
        },
    }

    Ok(())
}

fn print_metrics(metrics: &TextMetrics) {
    println!("Text Analysis");
    println!("  Word count:              {}", metrics.word_count);
    println!("  Sentence count:          {}", metrics.sentence_count);
    println!("  Paragraph count:         {}", metrics.paragraph_count);
    println!("  Unique words:            {}", metrics.unique_word_count);
    println!(
        "  Average word length:     {:.2} characters",
        metrics.avg_word_length
    );
    println!(
        "  Average sentence length: {:.2} words",
        metrics.avg_sentence_length
    );
}

fn print_similarity(scores: &SimilarityScores) {
    println!("Similarity Analysis");
    println!("  Cosine similarity:  {}", fraction_as_percent(scores.cosine_similarity));
    println!("  Jaccard similarity: {}", fraction_as_percent(scores.jaccard_similarity));
    println!("  TF-IDF similarity:  {}", fraction_as_percent(scores.tfidf_similarity));
    println!("  Average similarity: {}", fraction_as_percent(scores.average_similarity));
}

fn print_detection(result: &AiDetectionResult) {
    println!("AI Content Detection");
    println!("  AI probability: {}", score_as_percent(result.ai_probability));
    println!(
        "  Verdict:        {}",
        if result.is_ai_generated {
            "likely AI-generated"
        } else {
            "likely human-written"
        }
    );
    println!("  Confidence:     {}", score_as_percent(result.confidence));
    if !result.message.is_empty() {
        println!("  {}", result.message);
    }

    if let Some(details) = &result.details {
        println!("\nAnalysis Scores");
        println!("  Pattern score:   {}", score_as_percent(details.pattern_score));
        println!("  Structure score: {}", score_as_percent(details.structure_score));
        println!("  Style score:     {}", score_as_percent(details.style_score));
    }

    let Some(analysis) = &result.analysis else {
        return;
    };

    if !analysis.text_statistics.is_empty() {
        println!("\nText Statistics");
        for (key, value) in &analysis.text_statistics {
            println!("  {}: {}", humanize(key), plain_value(value));
        }
    }

    if !analysis.ai_indicators.is_empty() {
        println!("\nAI Indicators");
        for (key, value) in &analysis.ai_indicators {
            println!("  {}: {}", humanize(key), percent_value(value));
        }
    }

    if !analysis.human_indicators.is_empty() {
        println!("\nHuman Indicators");
        for (key, value) in &analysis.human_indicators {
            // Counts stay raw; only the flow metric reads as a percentage.
            let rendered = match value.as_f64() {
                Some(_) if key != "natural_flow" => format!("Count: {}", plain_value(value)),
                Some(n) => score_as_percent(n),
                None => plain_value(value),
            };
            println!("  {}: {}", humanize(key), rendered);
        }
    }

    if !analysis.key_findings.is_empty() {
        println!("\nKey Findings");
        for finding in &analysis.key_findings {
            println!("  - {}", finding);
        }
    }
}

/// "pattern_score" -> "Pattern Score".
fn humanize(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// JSON value without surrounding quotes for strings.
fn plain_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn percent_value(value: &Value) -> String {
    match value.as_f64() {
        Some(n) => score_as_percent(n),
        None => plain_value(value),
    }
}
