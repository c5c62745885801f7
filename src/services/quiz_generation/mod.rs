//! Recovery pipeline that turns untrusted model output into valid quiz
//! questions. The upstream model is asked for a literal JSON array but
//! routinely wraps it in an outer string encoding, code fences, or prose;
//! `extraction` salvages the array and `validation` repairs or drops the
//! individual elements.

pub mod extraction;
pub mod validation;

pub use extraction::extract;
pub use validation::{normalize, CHOICES_PER_QUESTION};

use std::fmt;

use thiserror::Error;

use crate::errors::AppError;

/// Upper bound on how much of an unparseable response is echoed back in
/// diagnostics.
pub const PREVIEW_LIMIT: usize = 1000;

#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("model response did not contain a valid question array ({diagnostics})")]
    NoValidArray { diagnostics: ParseDiagnostics },

    #[error("no valid questions produced")]
    NoValidQuestions,
}

impl GenerationError {
    /// Stable reason code, so callers can tell an unparseable response apart
    /// from a parseable one that contained nothing usable.
    pub fn reason(&self) -> &'static str {
        match self {
            GenerationError::NoValidArray { .. } => "no_valid_array",
            GenerationError::NoValidQuestions => "no_valid_questions",
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::UpstreamError(err.to_string())
    }
}

/// One parse strategy from the extraction chain, ordered from most
/// semantically informed to purely syntactic salvage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    DoubleDecode,
    Direct,
    FenceStripped,
    BracketScan,
    LooseScan,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::DoubleDecode => "double_decode",
            StrategyKind::Direct => "direct",
            StrategyKind::FenceStripped => "fence_stripped",
            StrategyKind::BracketScan => "bracket_scan",
            StrategyKind::LooseScan => "loose_scan",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone)]
pub struct StrategyAttempt {
    pub strategy: StrategyKind,
    pub detail: String,
}

/// Trace of every strategy the extractor tried, plus a bounded preview of
/// the text none of them could parse.
#[derive(Debug, Clone)]
pub struct ParseDiagnostics {
    pub attempts: Vec<StrategyAttempt>,
    pub preview: String,
}

impl fmt::Display for ParseDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tried ")?;
        for (i, attempt) in self.attempts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", attempt.strategy, attempt.detail)?;
        }
        write!(f, "; response preview: {}", self.preview)
    }
}

/// Truncates to [`PREVIEW_LIMIT`] characters and escapes control characters
/// so the preview is safe to embed in a single-line error message.
pub fn text_preview(text: &str) -> String {
    let mut preview = String::new();
    for ch in text.chars().take(PREVIEW_LIMIT) {
        if ch.is_control() {
            preview.extend(ch.escape_default());
        } else {
            preview.push(ch);
        }
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes_are_distinguishable() {
        let parse_failure = GenerationError::NoValidArray {
            diagnostics: ParseDiagnostics {
                attempts: vec![],
                preview: String::new(),
            },
        };
        assert_eq!(parse_failure.reason(), "no_valid_array");
        assert_eq!(GenerationError::NoValidQuestions.reason(), "no_valid_questions");
    }

    #[test]
    fn generation_errors_map_to_upstream_app_errors() {
        let err: AppError = GenerationError::NoValidQuestions.into();
        assert!(matches!(err, AppError::UpstreamError(_)));
        assert!(err.to_string().contains("no valid questions produced"));
    }

    #[test]
    fn preview_is_capped_at_limit() {
        let long = "a".repeat(PREVIEW_LIMIT + 500);
        assert_eq!(text_preview(&long).chars().count(), PREVIEW_LIMIT);
    }

    #[test]
    fn preview_escapes_control_characters() {
        let preview = text_preview("line one\nline two\tend");
        assert_eq!(preview, "line one\\nline two\\tend");
    }

    #[test]
    fn diagnostics_display_lists_strategies_and_preview() {
        let diagnostics = ParseDiagnostics {
            attempts: vec![
                StrategyAttempt {
                    strategy: StrategyKind::DoubleDecode,
                    detail: "expected value at line 1 column 1".to_string(),
                },
                StrategyAttempt {
                    strategy: StrategyKind::Direct,
                    detail: "parsed value is a string, not an array".to_string(),
                },
            ],
            preview: "oops".to_string(),
        };

        let rendered = diagnostics.to_string();
        assert!(rendered.contains("double_decode: expected value"));
        assert!(rendered.contains("direct: parsed value is a string"));
        assert!(rendered.ends_with("response preview: oops"));
    }
}
