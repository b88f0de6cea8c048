//! Export views of a `DataMap`.
//!
//! Responsibilities:
//! - Render the map as tab-indented JSON-like text (`Display`).
//! - Convert the map into a typed `serde_json::Value` for machine output.
//! - Serialize the map with serde, every value as a string.
//!
//! Does NOT handle:
//! - Comments. They are kept on the map but excluded from every view here.
//!
//! Invariants:
//! - Sections and keys are emitted in discovery order.
//! - Rendering never fails on map contents; this is a display concern only.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Number, Value};

use super::{DataMap, Section};

/// Values written without quotes in the text view.
///
/// Matches `true|false|t|f|yes|no|y|n`, a run of ASCII digits, or
/// two digit runs joined by a single `.`.
pub(crate) fn is_bare_literal(value: &str) -> bool {
    const WORDS: [&str; 8] = ["true", "false", "t", "f", "yes", "no", "y", "n"];
    if WORDS.contains(&value) {
        return true;
    }
    match value.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(value),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn quoted(s: &str) -> String {
    // Serializing a &str to JSON cannot fail.
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

impl fmt::Display for DataMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        let count = self.sections.len();
        for (i, section) in self.iter_sections().enumerate() {
            if section.is_empty() {
                write!(f, "\t{}: {{}}", quoted(section.name()))?;
            } else {
                writeln!(f, "\t{}: {{", quoted(section.name()))?;
                let len = section.len();
                for (j, (key, value)) in section.iter().enumerate() {
                    let rendered = if is_bare_literal(value) {
                        value.to_string()
                    } else {
                        quoted(value)
                    };
                    let separator = if j + 1 < len { "," } else { "" };
                    writeln!(f, "\t\t{}: {}{}", quoted(key), rendered, separator)?;
                }
                write!(f, "\t}}")?;
            }
            writeln!(f, "{}", if i + 1 < count { "," } else { "" })?;
        }
        write!(f, "}}")
    }
}

/// Typed JSON value for one raw INI value.
fn json_value(value: &str) -> Value {
    match value {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if is_digits(value) {
        if let Ok(n) = value.parse::<u64>() {
            return Value::Number(n.into());
        }
    } else if is_bare_literal(value) && value.contains('.') {
        if let Some(n) = value.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(value.to_string())
}

impl DataMap {
    /// JSON object of sections, with digit and `true`/`false` literals typed.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        for section in self.iter_sections() {
            let entries = section
                .iter()
                .map(|(k, v)| (k.to_string(), json_value(v)))
                .collect::<Map<String, Value>>();
            root.insert(section.name().to_string(), Value::Object(entries));
        }
        Value::Object(root)
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for DataMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in self.iter_sections() {
            map.serialize_entry(section.name(), section)?;
        }
        map.end()
    }
}
