use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Record type surfaced by the viewer.
pub const ASSISTANT_TYPE: &str = "assistant";

/// One assistant-tagged transcript line, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantMessage {
    /// 1-based line number; stable while the file is only appended to.
    pub line: usize,
    /// `message.content`, passed through verbatim.
    pub content: Value,
    pub model: String,
    pub uuid: String,
}

/// Project one transcript line. Returns `None` for blank, malformed or
/// non-assistant lines.
///
/// Only `type` decides whether a record is kept. `model` and `uuid` that are
/// present but not strings are rendered as JSON text.
pub fn parse_line(line_no: usize, line: &str) -> Option<AssistantMessage> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let record: Value = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            tracing::trace!(line = line_no, error = %e, "skipping malformed transcript line");
            return None;
        }
    };
    if record.get("type").and_then(Value::as_str) != Some(ASSISTANT_TYPE) {
        return None;
    }
    let message = record.get("message");
    let field = |v: Option<&Value>, default: &str| match v {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    Some(AssistantMessage {
        line: line_no,
        content: message
            .and_then(|m| m.get("content"))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())),
        model: field(message.and_then(|m| m.get("model")), "unknown"),
        uuid: field(record.get("uuid"), ""),
    })
}

/// Parse every line of `path`, keeping assistant records in file order.
///
/// This is a full re-parse on every call; callers find new entries by
/// comparing line numbers (see [`messages_after`]).
pub fn parse(path: &Path) -> Result<Vec<AssistantMessage>> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut messages = Vec::new();

    for (idx, line) in reader.split(b'\n').enumerate() {
        let bytes = line?;
        // Invalid UTF-8 is one more kind of malformed line.
        let Ok(text) = std::str::from_utf8(&bytes) else {
            continue;
        };
        if let Some(msg) = parse_line(idx + 1, text) {
            messages.push(msg);
        }
    }

    Ok(messages)
}

/// Entries strictly after `line`, i.e. what a viewer that has rendered up to
/// `line` still needs.
pub fn messages_after(messages: &[AssistantMessage], line: usize) -> &[AssistantMessage] {
    let start = messages.partition_point(|m| m.line <= line);
    &messages[start..]
}
