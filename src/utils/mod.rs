mod input;
pub mod logging;

pub use input::{
    hint_if_interactive_stdin, read_input, resolve_source, validate, Input, InputSource,
    FILE_FLAG, STDIN_LABEL,
};
