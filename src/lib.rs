use anyhow::Result;
use log::{debug, info};
use std::io::{Read, Write};

pub mod cli;
pub mod error;
pub mod formatters;
pub mod models;
pub mod tokenizers;
pub mod utils;

use crate::formatters::print_report;
use crate::models::{ContextWarning, Thresholds, TokenReport};
use crate::tokenizers::Tokenizer;
use crate::utils::{read_input, resolve_source, InputSource};

/// Analyze one piece of text and write the report to `out`.
///
/// `args` are the raw positional words from the command line. `stdin` is only
/// read when there are no arguments. Nothing is written to `out` unless the
/// input was acquired and validated.
pub fn run<R: Read>(
    args: &[String],
    stdin: R,
    out: &mut dyn Write,
    tokenizer: &dyn Tokenizer,
) -> Result<TokenReport> {
    let source = resolve_source(args);
    debug!("input source: {:?}", source);

    if source == InputSource::Stdin {
        utils::hint_if_interactive_stdin();
    }

    let input = read_input(source, stdin)?;

    info!(
        "tokenizing {} bytes with {}",
        input.text.len(),
        tokenizer.encoding()
    );
    let report = TokenReport::measure(&input.text, input.source_label, tokenizer);

    let warning = ContextWarning::for_tokens(report.token_count, &Thresholds::default());
    if let Some(w) = warning {
        debug!("context warning: {:?}", w);
    }

    print_report(out, &report, warning)?;

    Ok(report)
}
