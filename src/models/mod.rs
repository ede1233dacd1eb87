mod thresholds;
mod token_report;

pub use thresholds::{ContextWarning, Severity, Thresholds};
pub use token_report::TokenReport;
