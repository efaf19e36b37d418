//! Parse model output into an analysis record
//!
//! The model is instructed to emit a bare JSON object, but real responses
//! arrive wrapped in commentary, markdown fences, or trailing chatter. The
//! scanner here finds the first `{` and walks forward tracking brace depth
//! (ignoring braces inside string literals) until the matching `}`. That is
//! strictly more correct than either a non-greedy regex (under-captures
//! nested objects) or a greedy one (over-captures trailing braces).

use detective_domain::{AnalysisResult, Sentiment, Urgency};
use serde_json::Value;
use tracing::warn;

/// Parse a model response into the canonical analysis record
///
/// On success the four declared keys are read with type coercion only:
/// an unrecognized sentiment becomes `unknown`, a missing or non-numeric
/// score becomes `0.0`, non-string topics entries are dropped, and a
/// missing urgency defaults to `low`.
///
/// When the response contains no brace-delimited object, or the candidate
/// substring is not valid JSON, the fallback record is returned with the
/// diagnostic set and the full untrimmed output preserved in `raw_output`.
pub fn parse_analysis(output: &str) -> AnalysisResult {
    let Some(candidate) = find_json_object(output) else {
        warn!("no JSON object found in model output ({} chars)", output.len());
        return AnalysisResult::parse_failure(output);
    };

    let value: Value = match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(e) => {
            warn!("model output candidate failed to parse as JSON: {}", e);
            return AnalysisResult::parse_failure(output);
        }
    };

    let Some(obj) = value.as_object() else {
        warn!("model output parsed but is not a JSON object");
        return AnalysisResult::parse_failure(output);
    };

    let sentiment = obj
        .get("sentiment")
        .and_then(Value::as_str)
        .map(Sentiment::parse)
        .unwrap_or(Sentiment::Unknown);

    let sentiment_score = obj
        .get("sentiment_score")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);

    let topics = obj
        .get("topics")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let urgency = obj
        .get("urgency")
        .and_then(Value::as_str)
        .map(Urgency::parse)
        .unwrap_or(Urgency::Low);

    AnalysisResult::normalized(sentiment, sentiment_score, topics, urgency)
}

/// Find the first depth-balanced brace-delimited object in `text`
///
/// Braces inside double-quoted string literals (including escaped quotes)
/// do not affect the depth count. Returns `None` when no `{` occurs or the
/// first object is never closed.
fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, byte) in text.as_bytes().iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if *byte == b'\\' {
                escaped = true;
            } else if *byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    // Brace bytes are ASCII, so this slice lands on char boundaries
                    return Some(&text[start..=offset]);
                }
            }
            _ => {}
        }
    }

    None
}
