use anyhow::Result;
use tiktoken_rs::{cl100k_base, CoreBPE};

/// The one encoding this tool counts with (GPT-3.5/GPT-4 family).
pub const ENCODING_NAME: &str = "cl100k_base";

/// Anything that can turn text into a sequence of token ids.
pub trait Tokenizer {
    fn encoding(&self) -> &str;

    fn encode(&self, text: &str) -> Vec<usize>;

    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }
}

pub struct TiktokenTokenizer {
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self { bpe: cl100k_base()? })
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn encoding(&self) -> &str {
        ENCODING_NAME
    }

    fn encode(&self, text: &str) -> Vec<usize> {
        // Special token text like <|endoftext|> is counted as plain text
        self.bpe.encode_ordinary(text)
    }
}
