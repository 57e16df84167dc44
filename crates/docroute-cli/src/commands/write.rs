//! Write command

use std::path::Path;

use colored::Colorize;
use serde_json::{Map, Value};

use crate::commands::Context;
use crate::error::{CliError, Result};

/// Write a document built from `key=value` metadata and a body.
pub fn run_write(
    ctx: &Context,
    url: &str,
    meta: &[String],
    body: Option<&str>,
    body_file: Option<&Path>,
) -> Result<()> {
    let meta = parse_meta(meta)?;
    let body = match (body, body_file) {
        (Some(text), _) => text.to_string(),
        (None, Some(file)) => std::fs::read_to_string(file).map_err(|e| {
            CliError::user(format!("cannot read body file {}: {e}", file.display()))
        })?,
        (None, None) => String::new(),
    };

    let written = ctx.store().save(url, &meta, &body)?;
    println!("{} {}", "Wrote".green().bold(), ctx.display_path(&written));
    Ok(())
}

/// Parse `key=value` pairs. Values that are valid JSON keep their type.
fn parse_meta(pairs: &[String]) -> Result<Map<String, Value>> {
    let mut meta = Map::new();
    for pair in pairs {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CliError::user(format!("metadata must be key=value, got {pair:?}")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::user(format!("metadata key is empty in {pair:?}")));
        }
        let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
        meta.insert(key.to_string(), value);
    }
    Ok(meta)
}
