use crate::tokenizers::Tokenizer;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenReport {
    pub token_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    // chars per token, 0 when there are no tokens
    pub ratio: f64,
    pub source_label: Option<String>,
}

impl TokenReport {
    pub fn new(
        token_count: usize,
        char_count: usize,
        word_count: usize,
        source_label: Option<String>,
    ) -> Self {
        let ratio = if token_count > 0 {
            char_count as f64 / token_count as f64
        } else {
            0.0
        };

        Self {
            token_count,
            char_count,
            word_count,
            ratio,
            source_label,
        }
    }

    pub fn measure(text: &str, source_label: Option<String>, tokenizer: &dyn Tokenizer) -> Self {
        Self::new(
            tokenizer.count(text),
            text.chars().count(),
            text.split_whitespace().count(),
            source_label,
        )
    }
}
