//! Show command

use colored::Colorize;
use serde_json::{Value, json};

use crate::commands::Context;
use crate::error::{CliError, Result};

/// Print a document's metadata followed by its HTML or Markdown body.
pub fn run_show(ctx: &Context, url: &str, as_json: bool, raw: bool) -> Result<()> {
    let mut doc = ctx.store().get(url)?.ok_or(CliError::NotFound)?;
    let relative = ctx.display_path(&doc.path);
    let body = if raw {
        doc.raw_content.clone()
    } else {
        doc.render(&ctx.config.markdown).to_string()
    };

    if as_json {
        let body_key = if raw { "markdown" } else { "html" };
        let mut output = json!({
            "path": relative,
            "title": doc.title(),
            "meta": doc.meta,
        });
        output[body_key] = Value::String(body);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Document".bold(), relative.cyan());
    if let Some(title) = doc.title() {
        println!("  {:<10} {}", "title:".dimmed(), title);
    }
    for (key, value) in &doc.meta {
        if key == "title" {
            continue;
        }
        let rendered = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        println!("  {:<10} {}", format!("{key}:").dimmed(), rendered);
    }
    println!();
    print!("{body}");
    if !body.ends_with('\n') {
        println!();
    }
    Ok(())
}
