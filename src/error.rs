use std::io;

/// Failures while acquiring the text to analyze.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("falha ao ler {label}: {source}")]
    Io {
        label: String,
        #[source]
        source: io::Error,
    },
    #[error("nenhum texto fornecido (entrada vazia)")]
    EmptyInput,
}

impl InputError {
    pub fn io(label: impl Into<String>, source: io::Error) -> Self {
        InputError::Io {
            label: label.into(),
            source,
        }
    }
}
