//! Markdown rendering of findings.

use crate::findings::{Finding, Line, Report};

/// Render findings as Markdown, one `###` section per finding.
pub fn render_markdown(findings: &[Finding]) -> String {
    let mut md = String::new();

    for finding in findings {
        md.push_str(&format!("### {}\n\n", finding.heading()));
        for line in finding.lines() {
            push_line(&mut md, &line);
        }
        if !md.ends_with("\n\n") {
            md.push('\n');
        }
    }

    md
}

fn push_line(md: &mut String, line: &Line) {
    match line {
        Line::Field { label, value } => md.push_str(&format!("**{}:** {}\n\n", label, value)),
        Line::Text(text) => md.push_str(&format!("{}\n\n", text.trim())),
        Line::List { label, items } => {
            md.push_str(&format!("**{}:**\n", label));
            for item in items {
                md.push_str(&format!("- {}\n", link_or_text(item)));
            }
            md.push('\n');
        }
        Line::Term { term, definition } => {
            md.push_str(&format!("- **{}**: {}\n", term, definition.trim()));
        }
        Line::Nothing(text) => md.push_str(&format!("_{}_\n\n", text)),
    }
}

/// Bare URLs become Markdown links.
fn link_or_text(item: &str) -> String {
    if item.starts_with("http://") || item.starts_with("https://") {
        format!("[{}]({})", item, item)
    } else {
        item.to_string()
    }
}
