use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub medium: usize,
    pub large: usize,
    pub very_large: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            medium: 50_000,
            large: 100_000,
            very_large: 150_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextWarning {
    VeryLarge,
    Large,
    Medium,
}

impl ContextWarning {
    /// Picks at most one warning, checking from the largest threshold down.
    /// Comparisons are strict.
    pub fn for_tokens(token_count: usize, thresholds: &Thresholds) -> Option<Self> {
        if token_count > thresholds.very_large {
            Some(ContextWarning::VeryLarge)
        } else if token_count > thresholds.large {
            Some(ContextWarning::Large)
        } else if token_count > thresholds.medium {
            Some(ContextWarning::Medium)
        } else {
            None
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ContextWarning::VeryLarge | ContextWarning::Large => Severity::High,
            ContextWarning::Medium => Severity::Info,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ContextWarning::VeryLarge => {
                "Contexto muito grande! Considere compactar (/compact) antes de continuar."
            }
            ContextWarning::Large => "Contexto grande. A auto-compactação pode ocorrer em breve.",
            ContextWarning::Medium => "Contexto médio.",
        }
    }
}

impl fmt::Display for ContextWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity() {
            Severity::High => write!(f, "⚠️  ATENÇÃO: {}", self.message()),
            Severity::Info => write!(f, "ℹ️  Nota: {}", self.message()),
        }
    }
}
