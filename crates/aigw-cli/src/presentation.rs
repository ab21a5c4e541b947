//! Shared CLI presentation utilities. Format only, no domain logic.

use aigw_core::AiPlatform;
use chrono::{DateTime, Utc};

/// Truncate a string to a maximum display width, adding "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// Print the platform table header.
pub fn print_platform_header() {
    println!(
        "{:<5} {:<12} {:<20} {:<18} {:<17} URL",
        "ID", "Type", "Name", "Model", "Updated"
    );
    print_separator(110);
}

/// Print one platform as a table row. The access key is never shown.
pub fn print_platform_row(platform: &AiPlatform) {
    println!(
        "{:<5} {:<12} {:<20} {:<18} {:<17} {}",
        platform.id,
        platform.platform_type.as_str(),
        truncate_string(&platform.display_name, 19),
        truncate_string(&platform.model, 17),
        format_timestamp(platform.updated_at),
        platform.url
    );
}
