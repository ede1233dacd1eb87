use log::debug;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::error::InputError;

/// Marker that, as the first argument, turns the second one into a file path.
pub const FILE_FLAG: &str = "-f";

pub const STDIN_LABEL: &str = "<stdin>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Args(String),
    Stdin,
}

/// Text to analyze plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub text: String,
    /// Set only for file input.
    pub source_label: Option<String>,
}

/// Decide where the text comes from. Positional: `-f <path>` wins, then any
/// arguments at all, then stdin.
pub fn resolve_source(args: &[String]) -> InputSource {
    match args {
        [flag, path, ..] if flag == FILE_FLAG => InputSource::File(PathBuf::from(path)),
        [] => InputSource::Stdin,
        words => InputSource::Args(words.join(" ")),
    }
}

pub fn read_input<R: Read>(source: InputSource, mut stdin: R) -> Result<Input, InputError> {
    let input = match source {
        InputSource::File(path) => {
            let label = path.to_string_lossy().to_string();
            let text =
                fs::read_to_string(&path).map_err(|e| InputError::io(label.clone(), e))?;
            debug!("read {} bytes from {}", text.len(), label);
            Input {
                text,
                source_label: Some(label),
            }
        }
        InputSource::Args(text) => Input {
            text,
            source_label: None,
        },
        InputSource::Stdin => {
            let mut buffer = Vec::new();
            stdin
                .read_to_end(&mut buffer)
                .map_err(|e| InputError::io(STDIN_LABEL, e))?;
            debug!("read {} bytes from stdin", buffer.len());
            Input {
                text: String::from_utf8_lossy(&buffer).into_owned(),
                source_label: None,
            }
        }
    };

    validate(input)
}

/// Rejects text that is empty after trimming. The text itself is kept as is.
pub fn validate(input: Input) -> Result<Input, InputError> {
    if input.text.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }
    Ok(input)
}

/// Tell an interactive user how to end input before blocking on stdin.
pub fn hint_if_interactive_stdin() {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Lendo texto da entrada padrão (finalize com Ctrl-D)...");
    }
}
