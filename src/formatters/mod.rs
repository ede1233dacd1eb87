mod output;

pub use output::{border, format_thousands, print_report, render_report, BORDER_WIDTH};
