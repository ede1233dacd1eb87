use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tokcount",
    about = "Count tokens, characters and words in a piece of text",
    long_about = "Count tokens (cl100k_base), characters and words in a piece of text.\n\n\
                  Usage forms:\n  tokcount \"some text\"\n  tokcount -f <path>\n  cat file | tokcount",
    version
)]
pub struct Cli {
    /// Text to analyze, or `-f <path>` to read a file. Reads stdin when omitted
    #[arg(
        required = false,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "TEXT"
    )]
    pub words: Vec<String>,
}
