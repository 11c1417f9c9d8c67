//! Parse raw model completions into JSON values

use crate::error::ExtractorError;
use serde_json::Value;
use tracing::{debug, warn};

/// Parse a raw completion into a JSON value
///
/// Models wrap JSON in markdown fences and prose, break string values with
/// literal newlines, and leak control characters. Recovery is layered:
///
/// 1. Take the inner text of the first fenced block, if any, otherwise the
///    whole completion.
/// 2. Normalize the working text (see [`normalize`]).
/// 3. Parse the text as-is; failing that, with literal newlines collapsed
///    to spaces; failing that, the substring between the first `{` and the
///    last `}`.
///
/// When every strategy fails, the returned error carries the completion
/// length, a preview capped at `preview_chars` characters, and the failure
/// message of each strategy. No fallback document is ever synthesized.
pub fn parse_completion(raw: &str, preview_chars: usize) -> Result<Value, ExtractorError> {
    let working = match fenced_block(raw) {
        Some(inner) => {
            debug!("Found fenced block: {} of {} chars", inner.len(), raw.len());
            inner
        }
        None => raw,
    };

    let text = normalize(working);
    debug!("Normalized completion: {} chars", text.len());

    let mut attempts = Vec::new();

    // 1. The text as-is
    match serde_json::from_str(&text) {
        Ok(value) => return Ok(value),
        Err(e) => attempts.push(format!("direct: {}", e)),
    }

    // 2. Literal newlines collapsed to spaces. Lossy: deliberate multi-line
    // field content gets merged. Runs only after a direct parse has failed,
    // and success here is logged distinctly.
    let collapsed = text.replace('\n', " ");
    match serde_json::from_str(&collapsed) {
        Ok(value) => {
            warn!("Completion parsed only after newline collapse; multi-line field content may have been merged");
            return Ok(value);
        }
        Err(e) => attempts.push(format!("newline-collapse: {}", e)),
    }

    // 3. The outermost brace span, for prose around an unfenced object
    match brace_span(&text) {
        Some(span) => match serde_json::from_str(span) {
            Ok(value) => {
                debug!("Completion parsed from brace span: {} chars", span.len());
                return Ok(value);
            }
            Err(e) => attempts.push(format!("brace-span: {}", e)),
        },
        None => attempts.push("brace-span: no object braces found".to_string()),
    }

    Err(ExtractorError::MalformedCompletion {
        raw_len: raw.len(),
        preview: raw.chars().take(preview_chars).collect(),
        attempts,
    })
}

/// Extract the inner text of the first fenced block, if any
///
/// Checked in order: a triple-backtick block tagged `json`, a generic
/// triple-backtick block, a single-backtick block tagged `json`. The tag
/// matches case-insensitively.
fn fenced_block(raw: &str) -> Option<&str> {
    if let Some(inner) = tagged_fence(raw, "```", "```") {
        return Some(inner);
    }
    if let Some(inner) = delimited(raw, "```", "```") {
        return Some(inner);
    }
    tagged_fence(raw, "`", "`")
}

/// Find an `open` marker immediately followed by a case-insensitive `json`
/// tag, and return the text up to the next `close` marker
fn tagged_fence<'a>(raw: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let mut from = 0;
    while let Some(pos) = raw[from..].find(open) {
        let tag_start = from + pos + open.len();
        if raw
            .get(tag_start..tag_start + 4)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
        {
            let inner_start = tag_start + 4;
            let end = raw[inner_start..].find(close)?;
            return Some(&raw[inner_start..inner_start + end]);
        }
        from = tag_start;
    }
    None
}

/// Return the text between the first `open` and the following `close`
fn delimited<'a>(raw: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = raw.find(open)? + open.len();
    let end = raw[start..].find(close)? + start;
    Some(&raw[start..end])
}

/// Normalize a working text ahead of parsing
///
/// Two passes. Character-level first: CRLF becomes LF, tabs become single
/// spaces, and ASCII control characters other than LF are removed (LF is
/// kept so the newline-collapse parse strategy still has newlines to
/// collapse). Then edge cleanup: surrounding whitespace, stray edge
/// backticks, and a leading case-insensitive `json` label are stripped
/// repeatedly until the text stops changing. The fixpoint loop makes the
/// whole function idempotent.
pub(crate) fn normalize(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.replace("\r\n", "\n").chars() {
        match c {
            '\t' => cleaned.push(' '),
            '\n' => cleaned.push('\n'),
            c if (c as u32) < 32 => {}
            c => cleaned.push(c),
        }
    }

    let mut edge: &str = &cleaned;
    loop {
        let next = strip_json_label(edge.trim().trim_matches('`').trim());
        if next == edge {
            break;
        }
        edge = next;
    }
    edge.to_string()
}

/// Strip a leading case-insensitive `json` label token
fn strip_json_label(text: &str) -> &str {
    if text
        .get(..4)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
    {
        text[4..].trim_start()
    } else {
        text
    }
}

/// The substring from the first `{` to the last `}`, if both exist in order
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
