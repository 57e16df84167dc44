//! Resolve command

use crate::commands::Context;
use crate::error::{CliError, Result};

/// Print the file `url` resolves to, relative to the content root.
pub fn run_resolve(ctx: &Context, url: &str) -> Result<()> {
    let path = ctx.store().resolve(url)?.ok_or(CliError::NotFound)?;
    println!("{}", ctx.display_path(&path));
    Ok(())
}
