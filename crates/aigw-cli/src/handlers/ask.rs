//! Ask command handler.
//!
//! Sends one prompt through the gateway. Ctrl-C abandons the upstream
//! call instead of killing the process mid-request.

use aigw_core::AnswerResult;
use anyhow::Result;
use tokio_util::sync::CancellationToken;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Ask the platform named by `reference` and print its answer.
///
/// # Errors
///
/// Fails with [`CliError::Upstream`] when the platform could not be
/// reached or gave no usable answer.
pub async fn execute(ctx: &CliContext, reference: &str, prompt: &str) -> Result<()> {
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let result = ctx
        .app()
        .answers()
        .generate_answer_with_cancel(reference, prompt, cancel)
        .await;
    watcher.abort();

    match result.map_err(CliError::from)? {
        AnswerResult::Answered { answer } => {
            println!("{answer}");
            Ok(())
        }
        AnswerResult::Failed { error_message } => Err(CliError::Upstream(error_message).into()),
    }
}
