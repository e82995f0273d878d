//! ASCII table rendering of an [`AnalysisReport`] using the [`tabled`] crate.

use super::report::{AnalysisReport, FrequencyEntry, FrequencyTable};
use crate::stats::streaming_stats::LengthSummary;
use bytesize::ByteSize;
use tabled::{Table, Tabled};

/// Width of the bar column in the length bucket table, in characters.
pub const BAR_WIDTH: u64 = 20;

/// Row of a label frequency table.
#[derive(Debug, Clone, Tabled)]
pub struct FrequencyRow {
    #[tabled(rename = "Type")]
    pub label: String,
    #[tabled(rename = "Count")]
    pub count: u64,
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl From<&FrequencyEntry> for FrequencyRow {
    fn from(entry: &FrequencyEntry) -> Self {
        Self {
            label: entry.label.clone(),
            count: entry.count,
            percentage: format_percentage(entry.percentage),
        }
    }
}

/// Row of the length bucket table.
#[derive(Debug, Clone, Tabled)]
pub struct BucketRow {
    #[tabled(rename = "Range")]
    pub range: String,
    #[tabled(rename = "Count")]
    pub count: u64,
    #[tabled(rename = "Percentage")]
    pub percentage: String,
    #[tabled(rename = "Histogram")]
    pub bar: String,
}

/// Row of a two column name/value table.
#[derive(Debug, Clone, Tabled)]
pub struct MetricRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl MetricRow {
    fn new(metric: &str, value: impl ToString) -> Self {
        Self {
            metric: metric.to_string(),
            value: value.to_string(),
        }
    }
}

/// Row of the data file listing.
#[derive(Debug, Clone, Tabled)]
pub struct FileRow {
    #[tabled(rename = "File")]
    pub name: String,
    #[tabled(rename = "Size")]
    pub size: String,
}

/// Formats rows as an ASCII table under an underlined title.
///
/// # Arguments
/// * `rows` - The rows to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_table<T: Tabled>(rows: &[T], title: Option<&str>) -> String {
    let table = if rows.is_empty() {
        "No data available".to_string()
    } else {
        Table::new(rows).to_string()
    };

    match title {
        Some(title) => format!("{}\n{}\n{}", title, "=".repeat(title.chars().count()), table),
        None => table,
    }
}

/// Formats a byte count for display.
pub fn format_bytes(bytes: f64) -> String {
    ByteSize(bytes.max(0.0).round() as u64).to_string()
}

/// Formats a `0.0..=100.0` share with one decimal.
pub fn format_percentage(percentage: f64) -> String {
    format!("{:.1}%", percentage)
}

/// Bar of up to [`BAR_WIDTH`] blocks, scaled so that `max` fills the whole width.
pub fn histogram_bar(count: u64, max: u64) -> String {
    if max == 0 {
        return String::new();
    }

    "█".repeat((count * BAR_WIDTH / max) as usize)
}

/// Renders the complete report as text.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut sections = vec![
        title("Data Analysis Report"),
        format_table(&overview_rows(report), Some("Overview")),
        format_table(&file_rows(report), Some("Data Files")),
        frequency_section(&report.body_types, "bodies[0].type Distribution"),
        frequency_section(&report.content_types, "content_type Distribution"),
        frequency_section(&report.chat_types, "chat_type Distribution"),
    ];

    if report.total_lines > 0 {
        sections.push(length_section(
            &report.line_lengths,
            "Line Length Statistics (bytes)",
        ));
        sections.push(length_section(
            &report.body_lengths,
            "bodies[0] Length Statistics (bytes)",
        ));
    }

    sections.push(format_table(
        &bucket_rows(&report.length_buckets),
        Some("Line Length Buckets"),
    ));

    sections.join("\n\n")
}

fn title(text: &str) -> String {
    format!("{}\n{}", text, "=".repeat(text.chars().count()))
}

fn overview_rows(report: &AnalysisReport) -> Vec<MetricRow> {
    let mut rows = vec![
        MetricRow::new("Data files", report.files.len()),
        MetricRow::new("Valid lines", report.total_lines),
        MetricRow::new("Parse errors", report.parse_errors),
        MetricRow::new("Total size", format_bytes(report.total_file_size as f64)),
    ];

    if report.total_lines > 0 {
        rows.push(MetricRow::new(
            "Average line size",
            format_bytes(report.average_line_size()),
        ));
    }

    if !report.skipped_files.is_empty() {
        rows.push(MetricRow::new(
            "Skipped files",
            report.skipped_files.join(", "),
        ));
    }

    rows
}

fn file_rows(report: &AnalysisReport) -> Vec<FileRow> {
    report
        .files
        .iter()
        .map(|file| FileRow {
            name: file.name.clone(),
            size: format_bytes(file.size as f64),
        })
        .collect()
}

fn frequency_section(table: &FrequencyTable, heading: &str) -> String {
    let rows: Vec<FrequencyRow> = table.entries.iter().map(FrequencyRow::from).collect();
    format_table(&rows, Some(heading))
}

fn length_section(summary: &LengthSummary, heading: &str) -> String {
    let rows = [
        MetricRow::new("Min", format_bytes(summary.min as f64)),
        MetricRow::new("Max", format_bytes(summary.max as f64)),
        MetricRow::new("Avg", format_bytes(summary.avg)),
        MetricRow::new("P50", format_bytes(summary.p50)),
        MetricRow::new("P90", format_bytes(summary.p90)),
        MetricRow::new("P99", format_bytes(summary.p99)),
    ];
    format_table(&rows, Some(heading))
}

fn bucket_rows(buckets: &[FrequencyEntry]) -> Vec<BucketRow> {
    let max = buckets.iter().map(|entry| entry.count).max().unwrap_or(0);
    buckets
        .iter()
        .map(|entry| BucketRow {
            range: entry.label.clone(),
            count: entry.count,
            percentage: format_percentage(entry.percentage),
            bar: histogram_bar(entry.count, max),
        })
        .collect()
}
