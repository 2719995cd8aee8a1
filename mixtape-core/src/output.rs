use serde::Serialize;
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;
use std::str::FromStr;

use crate::counts::OperationCounts;

/// Output format for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

/// Result of a migrate operation
#[derive(Debug, Clone, Serialize)]
pub struct MigrateResult {
    pub input: PathBuf,
    pub changes: PathBuf,
    /// Output path, or `-` for standard output
    pub output: String,
    pub dry_run: bool,
    pub playlists_before: usize,
    pub playlists_after: usize,
    pub counts: OperationCounts,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for MigrateResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "migrate",
            "dry_run": self.dry_run,
            "output": self.output,
            "summary": {
                "actions": self.counts.total(),
                "playlists_before": self.playlists_before,
                "playlists_after": self.playlists_after,
            },
            "counts": self.counts,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        crate::report::render_summary(self, false)
    }
}

/// Plain-text footer shared by the summary and table reports.
pub(crate) fn write_footer(output: &mut String, result: &MigrateResult) {
    writeln!(
        output,
        "Playlists: {} -> {}",
        result.playlists_before, result.playlists_after
    )
    .unwrap();

    if result.dry_run {
        output.push_str("Dry run: no output written\n");
    } else if result.output == "-" {
        output.push_str("Output written to stdout\n");
    } else {
        writeln!(output, "Output written to {}", result.output).unwrap();
    }
}
