//! Remove command handler.
//!
//! Deletes the registry entry. Nothing is sent to the platform itself.

use aigw_core::{CoreError, parse_platform_ref};
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Delete the platform named by `reference` (`ai-platforms/{id}` or a bare ID).
pub async fn execute(ctx: &CliContext, reference: &str) -> Result<()> {
    let id = parse_platform_ref(reference)
        .map_err(|e| CliError::from(CoreError::from(e)))?;

    ctx.app()
        .platforms()
        .delete(id)
        .await
        .map_err(CliError::from)?;

    println!("Removed ai-platforms/{id}");
    Ok(())
}
