//! Add command handler.

use aigw_core::AiPlatformInput;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Register a platform and print its resource name.
pub async fn execute(ctx: &CliContext, input: AiPlatformInput) -> Result<()> {
    let platform = ctx
        .app()
        .platforms()
        .create(input)
        .await
        .map_err(CliError::from)?;

    println!(
        "Registered {} ({}, {})",
        platform.name(),
        platform.display_name,
        platform.platform_type.label()
    );
    Ok(())
}
