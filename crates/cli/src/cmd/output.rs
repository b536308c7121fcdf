//! Report renderers for `docmeta validate`.

use std::io::Write;

use color_eyre::eyre::{Result, WrapErr};
use docmeta_core::config::ReportFormat;
use docmeta_core::report::Report;
use docmeta_core::{Severity, ValidationResult};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

const RULE_WIDTH: usize = 100;
const MAX_PATH_DISPLAY: usize = 80;

const CSV_HEADER: [&str; 7] = [
    "File Path",
    "Compliant",
    "Document Type",
    "Issue Level",
    "Field",
    "Message",
    "Line Number",
];

/// One tabular row: a finding, or a single summary row for a clean document.
#[derive(Debug, Serialize, Tabled)]
struct FindingRow {
    #[tabled(rename = "File Path")]
    path: String,
    #[tabled(rename = "Compliant")]
    compliant: String,
    #[tabled(rename = "Document Type")]
    document_type: String,
    #[tabled(rename = "Issue Level")]
    level: String,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Line Number")]
    line: String,
}

pub fn render(report: &Report, format: ReportFormat, out: &mut impl Write) -> Result<()> {
    match format {
        ReportFormat::Text => render_text(report, out),
        ReportFormat::Json => render_json(report, out),
        ReportFormat::Csv => render_csv(report, out),
        ReportFormat::Table => render_table(report, out),
    }
}

fn render_json(report: &Report, out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(report).wrap_err("failed to serialise report")?;
    writeln!(out, "{json}")?;
    Ok(())
}

fn render_csv(report: &Report, out: &mut impl Write) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wtr.write_record(CSV_HEADER)?;
    for row in rows(report) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn render_table(report: &Report, out: &mut impl Write) -> Result<()> {
    let rows = rows(report);
    if rows.is_empty() {
        writeln!(out, "No markdown files found.")?;
        return Ok(());
    }
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    writeln!(out, "{table}")?;
    Ok(())
}

fn rows(report: &Report) -> Vec<FindingRow> {
    let mut rows = Vec::new();
    for result in report.files() {
        let compliant = if result.is_compliant() { "True" } else { "False" };
        let document_type = result.category().to_string();

        if result.findings().is_empty() {
            rows.push(FindingRow {
                path: result.path().to_string(),
                compliant: compliant.to_string(),
                document_type,
                level: String::new(),
                field: String::new(),
                message: String::new(),
                line: String::new(),
            });
            continue;
        }

        for finding in result.findings() {
            rows.push(FindingRow {
                path: result.path().to_string(),
                compliant: compliant.to_string(),
                document_type: document_type.clone(),
                level: finding.severity.to_string(),
                field: finding.field.clone(),
                message: finding.message.clone(),
                line: finding.line.map(|n| n.to_string()).unwrap_or_default(),
            });
        }
    }
    rows
}

fn render_text(report: &Report, out: &mut impl Write) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    let summary = report.summary();

    writeln!(out, "{rule}")?;
    writeln!(out, "FRONTMATTER VALIDATION REPORT")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Generated: {}", report.generated())?;
    writeln!(out)?;

    writeln!(out, "SUMMARY")?;
    writeln!(out, "{}", "-".repeat(7))?;
    writeln!(out, "Total files scanned: {}", summary.total_files)?;
    writeln!(out, "Compliant files: {}", summary.compliant_files)?;
    writeln!(out, "Non-compliant files: {}", summary.non_compliant_files)?;
    match summary.compliance_rate() {
        Some(rate) => writeln!(out, "Compliance rate: {rate:.1}%")?,
        None => writeln!(out, "Compliance rate: N/A")?,
    }
    writeln!(out, "Errors: {}", summary.total_errors)?;
    writeln!(out, "Warnings: {}", summary.total_warnings)?;
    writeln!(out, "Info: {}", summary.total_info)?;

    let with_notes: Vec<&ValidationResult> =
        report.compliant().filter(|r| !r.findings().is_empty()).collect();
    if !with_notes.is_empty() {
        writeln!(out)?;
        writeln!(out, "COMPLIANT FILES WITH NOTES")?;
        writeln!(out, "{}", "-".repeat(26))?;
        for result in with_notes {
            writeln!(out, "{}", shorten(result.path()))?;
            for finding in result.findings().iter().filter(|f| f.severity != Severity::Error) {
                writeln!(out, "  {finding}")?;
            }
        }
    }

    let failing: Vec<&ValidationResult> = report.non_compliant().collect();
    if !failing.is_empty() {
        writeln!(out)?;
        writeln!(out, "NON-COMPLIANT FILES")?;
        writeln!(out, "{}", "-".repeat(19))?;
        for result in failing {
            writeln!(out, "{}", shorten(result.path()))?;
            for finding in result.findings() {
                writeln!(out, "  {finding}")?;
            }
        }
    }

    let categories = report.by_category();
    if !categories.is_empty() {
        writeln!(out)?;
        writeln!(out, "DOCUMENT TYPE BREAKDOWN")?;
        writeln!(out, "{}", "-".repeat(23))?;
        for (category, count) in categories {
            writeln!(
                out,
                "  {category}: {}/{} ({:.1}%)",
                count.compliant,
                count.total,
                count.rate()
            )?;
        }
    }

    writeln!(out, "{rule}")?;
    Ok(())
}

/// Keep the tail of long paths so the file name stays visible.
fn shorten(path: &str) -> String {
    let count = path.chars().count();
    if count <= MAX_PATH_DISPLAY {
        return path.to_string();
    }
    let tail: String = path.chars().skip(count - (MAX_PATH_DISPLAY - 3)).collect();
    format!("...{tail}")
}
