//! Human-readable run reports.

use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::io::{self, IsTerminal};

use crate::output::{write_footer, MigrateResult, OutputFormat, OutputFormatter};

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    use_color.unwrap_or_else(|| io::stderr().is_terminal())
}

/// Render a report in the requested format
pub fn render_result(result: &MigrateResult, format: OutputFormat, use_color: bool) -> String {
    match format {
        OutputFormat::Summary => render_summary(result, use_color),
        OutputFormat::Table => render_table(result, use_color),
        OutputFormat::Json => result.format_json(),
    }
}

/// Render the operation counts as indented `KIND: n` lines
pub fn render_summary(result: &MigrateResult, use_color: bool) -> String {
    let mut output = String::new();

    let header = "Done. Operations made:";
    if use_color {
        writeln!(output, "{}", AnsiColor::Green.bold().paint(header)).unwrap();
    } else {
        writeln!(output, "{}", header).unwrap();
    }

    if result.counts.is_empty() {
        output.push_str("  (none)\n");
    }
    for (kind, count) in result.counts.iter() {
        if use_color {
            writeln!(output, "  {}: {}", AnsiColor::Cyan.paint(kind.as_str()), count).unwrap();
        } else {
            writeln!(output, "  {}: {}", kind, count).unwrap();
        }
    }

    write_footer(&mut output, result);
    output
}

/// Render the operation counts as a table with a total row
pub fn render_table(result: &MigrateResult, use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Disabled);

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Operation").fg(Color::Cyan),
            Cell::new("Count").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Operation", "Count"]);
    }

    for (kind, count) in result.counts.iter() {
        if use_color {
            table.add_row(vec![
                Cell::new(kind.as_str()),
                Cell::new(count.to_string()).fg(Color::Yellow),
            ]);
        } else {
            table.add_row(vec![kind.as_str().to_string(), count.to_string()]);
        }
    }

    table.add_row(vec!["Total".to_string(), result.counts.total().to_string()]);

    let mut output = format!("{}\n", table);
    write_footer(&mut output, result);
    output
}
