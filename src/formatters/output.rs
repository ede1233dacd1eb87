use anyhow::Result;
use std::io::Write;
use thousands::Separable;

use crate::models::{ContextWarning, TokenReport};

pub const BORDER_WIDTH: usize = 50;

// Labels are padded so values line up in one column
const LABEL_WIDTH: usize = 12;

/// Groups digits in threes with `.`, e.g. `1234567` -> `1.234.567`.
pub fn format_thousands(n: usize) -> String {
    n.separate_with_dots()
}

pub fn border() -> String {
    "=".repeat(BORDER_WIDTH)
}

fn field(label: &str, value: &str) -> String {
    format!("{:<width$}{}", label, value, width = LABEL_WIDTH)
}

pub fn render_report(report: &TokenReport) -> String {
    let mut lines = vec![border()];

    if let Some(label) = &report.source_label {
        lines.push(format!("Arquivo: {}", label));
        lines.push(border());
    }

    lines.push(field("Tokens:", &format_thousands(report.token_count)));
    lines.push(field("Caracteres:", &format_thousands(report.char_count)));
    lines.push(field("Palavras:", &format_thousands(report.word_count)));
    lines.push(field("Ratio:", &format!("{:.2} chars/token", report.ratio)));
    lines.push(border());

    lines.join("\n")
}

pub fn print_report(
    writer: &mut dyn Write,
    report: &TokenReport,
    warning: Option<ContextWarning>,
) -> Result<()> {
    writeln!(writer, "{}", render_report(report))?;

    if let Some(warning) = warning {
        writeln!(writer)?;
        writeln!(writer, "{}", warning)?;
    }

    writer.flush()?;
    Ok(())
}
