//! Markdown sanitizer for generated advisory text
//!
//! The generative model is asked for plain prose but routinely answers in
//! markdown anyway. This strips formatting syntax deterministically so
//! clients always receive plain text.
//!
//! Rules run in a fixed order; the whole pass repeats until the text stops
//! changing. Every rule only removes characters, so the loop terminates,
//! and the fixpoint makes `sanitize_markdown` idempotent.

use regex::Regex;
use std::sync::LazyLock;

/// Leading heading markers (1-6 `#` after up to 3 spaces of indent)
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s{0,3}#{1,6}\s*").unwrap());

/// Paired bold delimiters
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Paired italic delimiters
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

/// Inline or fenced code delimiters
static CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`{1,3}([^`]*)`{1,3}").unwrap());

/// Leading bullet markers
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[-*•]\s*").unwrap());

/// Leading numbered-list markers
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s*").unwrap());

/// Runs of 3+ newlines
static BLANK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// One ordered application of all stripping rules
fn sanitize_pass(text: &str) -> String {
    let text = HEADING.replace_all(text, "");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = CODE.replace_all(&text, "$1");
    let text = BULLET.replace_all(&text, "");
    let text = NUMBERED.replace_all(&text, "");
    let text = BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Strip markdown formatting from generated text, returning plain prose.
///
/// Idempotent: `sanitize_markdown(sanitize_markdown(x)) == sanitize_markdown(x)`.
pub fn sanitize_markdown(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = sanitize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

/// True if `text` is already fully sanitized (no rule would change it)
#[cfg(test)]
fn is_sanitized(text: &str) -> bool {
    sanitize_pass(text) == text
}
