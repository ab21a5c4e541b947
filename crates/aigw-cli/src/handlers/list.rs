//! List command handler.

use aigw_core::PageRequest;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_platform_header, print_platform_row};

/// Print one page of platforms, or every page with `all`.
///
/// When more platforms remain, the token for the next page is printed so
/// it can be passed back through `--page-token`.
pub async fn execute(
    ctx: &CliContext,
    page_size: i64,
    page_token: Option<String>,
    all: bool,
) -> Result<()> {
    let mut request = PageRequest {
        page_size,
        page_token,
    };
    let mut printed = 0usize;

    loop {
        let page = ctx
            .app()
            .platforms()
            .list(&request)
            .await
            .map_err(CliError::from)?;

        if printed == 0 && page.items.is_empty() {
            println!("No AI platforms registered.");
            println!("Use 'aigw add' to register one.");
            return Ok(());
        }
        if printed == 0 {
            print_platform_header();
        }
        for platform in &page.items {
            print_platform_row(platform);
        }
        printed += page.items.len();

        match page.next_page_token {
            Some(token) if all => request = PageRequest::with_token(token),
            Some(token) => {
                println!();
                println!("More platforms available. Next page: --page-token {token}");
                return Ok(());
            }
            None => break,
        }
    }

    println!();
    println!("{printed} platform(s)");
    Ok(())
}
