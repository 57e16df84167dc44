//! YAML front matter splitting
//!
//! A document carries front matter when its first line is `---`. The block
//! runs to the next line holding only `---` (or `...`). One blank line after
//! the closing delimiter separates metadata from the body and is not part
//! of either.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

static OPENING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A---[ \t]*\r?\n").unwrap());

static CLOSING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:---|\.\.\.)[ \t]*\r?(?:\n|\z)").unwrap());

static LEADING_BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A\r?\n").unwrap());

/// A document split into its raw YAML block and Markdown body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// YAML text between the delimiters, `None` without front matter
    pub yaml: Option<&'a str>,
    /// Everything after the front matter
    pub body: &'a str,
}

/// Split `source` into front matter and body.
///
/// An opening delimiter without a matching close is treated as ordinary
/// Markdown (a thematic break), so the whole source becomes the body.
pub fn split(source: &str) -> Split<'_> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let Some(open) = OPENING.find(source) else {
        return Split {
            yaml: None,
            body: source,
        };
    };
    let rest = &source[open.end()..];
    let Some(close) = CLOSING.find(rest) else {
        return Split {
            yaml: None,
            body: source,
        };
    };

    let body = &rest[close.end()..];
    let body = LEADING_BLANK_LINE
        .find(body)
        .map_or(body, |blank| &body[blank.end()..]);

    Split {
        yaml: Some(&rest[..close.start()]),
        body,
    }
}

/// Parse a YAML front matter block into a JSON object.
///
/// An empty or null block yields an empty map; anything other than a
/// mapping at the top level is rejected.
pub fn parse_meta(yaml: &str) -> Result<Map<String, Value>, String> {
    if yaml.trim().is_empty() {
        return Ok(Map::new());
    }
    let value: YamlValue = serde_yaml::from_str(yaml).map_err(|e| e.to_string())?;
    match yaml_to_json(&value) {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(format!(
            "front matter must be a mapping, found {}",
            json_kind(&other)
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

/// Convert YAML to JSON. Non-string keys are stringified.
pub(crate) fn yaml_to_json(value: &YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => Value::Array(items.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => {
            let mut json_map = Map::new();
            for (key, value) in map {
                let key = match key {
                    YamlValue::String(s) => s.clone(),
                    other => match yaml_to_json(other) {
                        Value::String(s) => s,
                        converted => converted.to_string(),
                    },
                };
                json_map.insert(key, yaml_to_json(value));
            }
            Value::Object(json_map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}
