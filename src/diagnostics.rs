use std::path::PathBuf;

use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::cli::Target;
use crate::extract::WordList;

#[derive(Debug, Serialize, Clone)]
pub struct Report {
    pub version: u8,
    pub generated_at: String,
    pub source: PathBuf,
    pub output: PathBuf,
    pub target: Target,
    pub total_tokens: usize,
    pub unique_words: usize,
}

pub fn build_report(source: PathBuf, output: PathBuf, target: Target, list: &WordList) -> Report {
    Report {
        version: 1,
        generated_at: now_rfc3339(),
        source,
        output,
        target,
        total_tokens: list.total_tokens,
        unique_words: list.len(),
    }
}

pub fn summarize(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(&format!("Source: {}\n", report.source.display()));
    output.push_str(&format!("Output: {}\n", report.output.display()));
    output.push_str(&format!("Target: {}\n", format_target(report.target)));
    output.push_str(&format!("Tokens read: {}\n", report.total_tokens));
    output.push_str(&format!("Unique words: {}\n", report.unique_words));
    if report.unique_words == 0 {
        output.push_str("  (no words found; generated list is empty)\n");
    }

    output.trim_end().to_string()
}

fn format_target(target: Target) -> &'static str {
    match target {
        Target::Cpp => "cpp",
        Target::Rust => "rust",
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
