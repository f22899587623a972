//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - Output format options

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Analyze a WhatsApp chat export: activity, content, and sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --format json -o report.json
    chatlens chat.txt --stopwords my_stopwords.txt
    chatlens chat.txt --list-senders")]
pub struct Args {
    /// Path to the exported chat transcript (.txt)
    pub input: String,

    /// Restrict the analysis to one sender ("Overall" = everyone)
    #[arg(short, long, default_value = "Overall", value_name = "NAME")]
    pub user: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Stop-word file, one word per line (bundled list if omitted)
    #[arg(long, value_name = "PATH")]
    pub stopwords: Option<String>,

    /// List the senders found in the transcript and exit
    #[arg(long)]
    pub list_senders: bool,
}

/// Output format options.
///
/// - [`Text`](ReportFormat::Text) - Sectioned report for the terminal
/// - [`Json`](ReportFormat::Json) - The full [`AnalysisReport`](crate::report::AnalysisReport) as JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable sectioned report (default)
    #[default]
    Text,

    /// Machine-readable JSON report
    Json,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "json"]
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}
