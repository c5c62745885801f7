//! Best-effort recovery of a JSON question array from raw model output.
//!
//! Strategies run in a fixed order; the first one that parses cleanly and
//! yields an array wins. Well-behaved responses only ever pay for the first
//! strategy, degraded ones fall through to progressively blunter salvage.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::{text_preview, GenerationError, ParseDiagnostics, StrategyAttempt, StrategyKind};

/// Shortest `[` .. `]` span, for the last-resort scan.
static LOOSE_ARRAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*?\]").expect("loose array pattern is a valid regex"));

type StrategyFn = fn(&str) -> Result<Vec<Value>, String>;

const STRATEGIES: &[(StrategyKind, StrategyFn)] = &[
    (StrategyKind::DoubleDecode, double_decode),
    (StrategyKind::Direct, direct_parse),
    (StrategyKind::FenceStripped, fence_stripped),
    (StrategyKind::BracketScan, bracket_scan),
    (StrategyKind::LooseScan, loose_scan),
];

/// Extracts a candidate question array from raw response text.
///
/// The returned elements are untyped; enforcing the question schema is the
/// normalizer's job. If no strategy produces an array the error carries the
/// full attempt trace and a bounded preview of the offending text.
pub fn extract(raw: &str) -> Result<Vec<Value>, GenerationError> {
    let mut attempts = Vec::with_capacity(STRATEGIES.len());
    for (kind, run) in STRATEGIES {
        match run(raw) {
            Ok(items) => return Ok(items),
            Err(detail) => attempts.push(StrategyAttempt {
                strategy: *kind,
                detail,
            }),
        }
    }

    Err(GenerationError::NoValidArray {
        diagnostics: ParseDiagnostics {
            attempts,
            preview: text_preview(raw),
        },
    })
}

/// The upstream gateway usually double-encodes its answer: the body is a JSON
/// string whose content is the actual array, often with prose appended after
/// the closing bracket.
fn double_decode(raw: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(raw).map_err(|e| e.to_string())? {
        Value::Array(items) => Ok(items),
        Value::String(inner) => {
            let end = inner
                .rfind(']')
                .ok_or_else(|| "decoded string contains no closing bracket".to_string())?;
            let value: Value =
                serde_json::from_str(&inner[..=end]).map_err(|e| e.to_string())?;
            require_array(value)
        }
        other => Err(format!(
            "top-level value is {}, not an array or string",
            value_kind(&other)
        )),
    }
}

fn direct_parse(raw: &str) -> Result<Vec<Value>, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    require_array(value)
}

fn fence_stripped(raw: &str) -> Result<Vec<Value>, String> {
    let stripped = strip_code_fences(raw);
    if stripped == raw.trim() {
        return Err("no code fences to strip".to_string());
    }
    double_decode(stripped).or_else(|_| direct_parse(stripped))
}

/// Depth-counted scan from the first `[` to its matching `]`. Purely
/// structural: brackets inside string literals are not skipped, so a prompt
/// containing a literal bracket can end the span early.
fn bracket_scan(raw: &str) -> Result<Vec<Value>, String> {
    let text = strip_code_fences(raw);
    let span = balanced_array_span(text)
        .ok_or_else(|| "no balanced bracket span found".to_string())?;
    parse_string_then_array(span)
}

fn loose_scan(raw: &str) -> Result<Vec<Value>, String> {
    let span = LOOSE_ARRAY_RE
        .find(raw)
        .ok_or_else(|| "no array-like span found".to_string())?;
    parse_string_then_array(span.as_str())
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("```json").unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix("```").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

fn balanced_array_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// A salvaged span may itself be double-encoded, so try it as a JSON string
/// first and fall back to parsing it directly.
fn parse_string_then_array(span: &str) -> Result<Vec<Value>, String> {
    match serde_json::from_str::<Value>(span).map_err(|e| e.to_string())? {
        Value::String(inner) => {
            let value: Value = serde_json::from_str(&inner).map_err(|e| e.to_string())?;
            require_array(value)
        }
        other => require_array(other),
    }
}

fn require_array(value: Value) -> Result<Vec<Value>, String> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(format!("parsed value is {}, not an array", value_kind(&other))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
