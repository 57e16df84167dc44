//! Configuration display command

use crate::commands::Context;
use crate::error::Result;

/// Print the effective configuration as TOML.
pub fn run_config(ctx: &Context) -> Result<()> {
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}
