//! Error rendering using ariadne
//!
//! This module renders checker diagnostics with source code snippets and
//! annotations.

use crate::{CheckError, Diagnostic};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<unknown>";

/// Render diagnostics with formatting to stderr
pub fn render_diagnostics(source: &str, diagnostics: &[Diagnostic]) {
    render_to_writer(source, diagnostics, &mut std::io::stderr(), true).ok();
}

/// Render diagnostics to a specific writer
pub fn render_diagnostics_to(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_to_writer(source, diagnostics, writer, true)
}

/// Render diagnostics to a String (useful for web UIs, logs, etc.)
pub fn render_diagnostics_to_string(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    render_to_writer(source, diagnostics, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render diagnostics to a String without color codes (useful for tests)
pub fn render_diagnostics_to_string_no_color(source: &str, diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    render_to_writer(source, diagnostics, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render interface check errors to stderr
pub fn render_check_errors(source: &str, errors: &[CheckError]) {
    let diagnostics: Vec<Diagnostic> = errors.iter().map(|e| e.to_diagnostic()).collect();
    render_diagnostics(source, &diagnostics);
}

/// Render interface check errors to a String without color codes
pub fn render_check_errors_to_string_no_color(source: &str, errors: &[CheckError]) -> String {
    let diagnostics: Vec<Diagnostic> = errors.iter().map(|e| e.to_diagnostic()).collect();
    render_diagnostics_to_string_no_color(source, &diagnostics)
}

fn render_to_writer(
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let mut report = Report::build(ReportKind::Error, (SOURCE_ID, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        // Primary label with the main error span
        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        // Related info as secondary labels
        for related in &diag.related {
            let color = colors.next();
            report = report.with_label(
                Label::new((SOURCE_ID, related.span.0.clone()))
                    .with_message(&related.message)
                    .with_color(color),
            );
        }

        for help_msg in &diag.help {
            report = report.with_help(help_msg);
        }

        // Reborrow to avoid moving the writer
        report
            .finish()
            .write((SOURCE_ID, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
