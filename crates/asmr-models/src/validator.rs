//! Validation of raw model output into trigger records.
//!
//! The model is told to answer with a bare JSON array, but replies often
//! arrive wrapped in a markdown code fence. Records with the wrong shape are
//! dropped rather than repaired.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::trigger::{Trigger, TriggerTimestamp};

/// Model output that could not be read as a trigger array.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("AI response was not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("AI response was not a valid array.")]
    NotAnArray,
}

/// Parse raw model text into the well-formed triggers it contains.
///
/// An empty vector is a valid answer and means no triggers were found.
pub fn validate_triggers(raw_text: &str) -> Result<Vec<Trigger>, FormatError> {
    let json = strip_code_fence(raw_text);
    let value: Value = serde_json::from_str(json)?;

    let Value::Array(items) = value else {
        return Err(FormatError::NotAnArray);
    };

    let total = items.len();
    let triggers: Vec<Trigger> = items.iter().filter_map(trigger_from_value).collect();

    if triggers.len() < total {
        debug!(
            kept = triggers.len(),
            dropped = total - triggers.len(),
            "Dropped malformed trigger records"
        );
    }

    Ok(triggers)
}

/// Remove a surrounding ```` ```json ```` or ```` ``` ```` fence.
///
/// The closing fence is assumed to be the last three characters, so they are
/// removed whenever an opening fence is present.
pub fn strip_code_fence(raw_text: &str) -> &str {
    let text = raw_text.trim();
    let inner = if let Some(rest) = text.strip_prefix("```json") {
        drop_last_chars(rest, 3)
    } else if let Some(rest) = text.strip_prefix("```") {
        drop_last_chars(rest, 3)
    } else {
        return text;
    };
    inner.trim()
}

fn drop_last_chars(s: &str, count: usize) -> &str {
    match s.char_indices().rev().nth(count - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

fn trigger_from_value(item: &Value) -> Option<Trigger> {
    let object = item.as_object()?;

    let trigger = object.get("trigger")?.as_str()?;
    if trigger.trim().is_empty() {
        return None;
    }

    let timestamp = match object.get("timestamp")? {
        Value::String(s) => TriggerTimestamp::Text(s.clone()),
        Value::Number(n) => TriggerTimestamp::Seconds(n.clone()),
        _ => return None,
    };

    Some(Trigger {
        trigger: trigger.to_string(),
        timestamp,
    })
}
