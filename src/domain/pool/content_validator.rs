use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::types::Pool;

// Angle-bracket-delimited span. A syntactic heuristic, not an HTML
// parser; nesting is irrelevant here.
static MARKUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid markup regex"));

/// A name or symbol field that failed markup screening, kept with its
/// original value for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupRejection {
    pub field: String,
    pub value: String,
}

/// True when the text contains anything resembling a markup tag.
pub fn contains_markup(text: &str) -> bool {
    MARKUP_RE.is_match(text)
}

/// Screen the name and symbol of a pool's first two tokens.
///
/// A non-empty result rejects the whole pool. Rejection is a normal
/// outcome, never an error; callers log the offending fields and drop
/// the pool.
pub fn markup_rejections(pool: &Pool) -> Vec<MarkupRejection> {
    let mut rejections = Vec::new();

    for (index, token) in pool.tokens.iter().take(2).enumerate() {
        if contains_markup(&token.name) {
            rejections.push(MarkupRejection {
                field: format!("token{}.name", index),
                value: token.name.clone(),
            });
        }
        if contains_markup(&token.symbol) {
            rejections.push(MarkupRejection {
                field: format!("token{}.symbol", index),
                value: token.symbol.clone(),
            });
        }
    }

    rejections
}
