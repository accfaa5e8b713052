//! Output formatting utilities

use crate::domain::duration::{format_duration, format_seconds};
use crate::domain::{AggregateReport, DeltaFormat, Entry};
use chrono::Duration;

/// Date format of the first LaTeX column
const LATEX_DATE_FORMAT: &str = "%d %b %y %H:%M UTC";

fn format_delta(delta: Duration, format: DeltaFormat) -> String {
    match format {
        DeltaFormat::Duration => format_duration(delta),
        DeltaFormat::Seconds => format_seconds(delta),
    }
}

/// Format an aggregate report, one interval per line.
///
/// Lines are aligned at the `|` separating time worked from the running
/// delta.
pub fn format_report(report: &AggregateReport) -> String {
    let worked: Vec<String> = report
        .rows
        .iter()
        .map(|row| format_duration(row.accumulated))
        .collect();
    let width = worked.iter().map(String::len).max().unwrap_or(0);

    let mut output = String::new();
    for (row, worked) in report.rows.iter().zip(&worked) {
        output.push_str(&format!(
            "{} {:>width$} | {}\n",
            row.key,
            worked,
            format_delta(row.running_delta, report.delta_format),
            width = width
        ));
    }

    if let Some(total) = report.total {
        output.push_str(&format!(
            "Total: {}\n",
            format_delta(total, report.delta_format)
        ));
    }

    output
}

fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\textbackslash{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format entries as a LaTeX `tabular` of date, duration and description
pub fn format_latex_table(entries: &[Entry]) -> String {
    let mut output = String::from("\\begin{tabular}{l|r|r}\n");
    for entry in entries {
        output.push_str(&format!(
            "\t{} & {} & {} \\\\ \n",
            entry.date.format(LATEX_DATE_FORMAT),
            format_duration(entry.duration),
            escape_latex(&entry.description)
        ));
    }
    output.push_str("\\end{tabular}\n");
    output
}
