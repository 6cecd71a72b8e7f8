//! Report formatting and printing utilities.
//!
//! This module prints findings as colored terminal sections. Kept separate
//! from the engine so truthpulse can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::findings::{Finding, Line, Report};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Paragraphs are wrapped to this display width.
const WRAP_WIDTH: usize = 80;

/// Print findings as terminal sections to stdout.
pub fn report(findings: &[Finding]) {
    report_to(findings, &mut io::stdout().lock());
}

/// Print findings to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(findings: &[Finding], writer: &mut W) {
    for finding in findings {
        print_finding(finding, writer);
    }

    print_summary(findings, writer);
}

/// Print the "nothing to analyze" prompt to stderr.
pub fn print_invalid_input(message: &str) {
    print_invalid_input_to(message, &mut io::stderr().lock());
}

pub fn print_invalid_input_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_finding<W: Write>(finding: &Finding, writer: &mut W) {
    let heading = finding.heading();
    let rule = "\u{2500}".repeat(UnicodeWidthStr::width(heading)); // ─

    let _ = writeln!(writer, "{}", heading.bold().cyan());
    let _ = writeln!(writer, "{}", rule.blue());

    for line in finding.lines() {
        print_line(&line, writer);
    }

    let _ = writeln!(writer); // Empty line between sections
}

fn print_line<W: Write>(line: &Line, writer: &mut W) {
    match line {
        Line::Field { label, value } => {
            let _ = writeln!(writer, "{} {}", format!("{}:", label).bold(), value);
        }
        Line::Text(text) => {
            for row in wrap(text, WRAP_WIDTH) {
                let _ = writeln!(writer, "{}", row);
            }
        }
        Line::List { label, items } => {
            let _ = writeln!(writer, "{}", format!("{}:", label).bold());
            for item in items {
                let _ = writeln!(writer, "  {} {}", "-".blue(), item);
            }
        }
        Line::Term { term, definition } => {
            let _ = writeln!(writer, "{}", format!("{}:", term).bold());
            for row in wrap(definition, WRAP_WIDTH - 2) {
                let _ = writeln!(writer, "  {}", row);
            }
        }
        Line::Nothing(text) => {
            let _ = writeln!(writer, "{}", text.dimmed());
        }
    }
}

fn print_summary<W: Write>(findings: &[Finding], writer: &mut W) {
    let flagged: Vec<String> = findings
        .iter()
        .filter(|f| f.flagged())
        .map(|f| f.kind().to_string())
        .collect();

    if flagged.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Nothing flagged".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} of {} {} flagged ({})",
            FAILURE_MARK.yellow(),
            flagged.len(),
            findings.len(),
            if findings.len() == 1 {
                "section"
            } else {
                "sections"
            },
            flagged.join(", ").yellow()
        );
    }
}

/// Greedy word wrap by display width. Words wider than `width` get a row of
/// their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current_width > 0 && current_width + 1 + word_width > width {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
