/// ANSI color helper utilities for terminal output.
use crate::models::variant::SessionVariant;

pub const RESET: &str = "\x1b[0m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Running sessions are green, cycling sessions yellow, like their popups.
pub fn color_for_variant(variant: SessionVariant) -> &'static str {
    match variant {
        SessionVariant::Cadence => GREEN,
        SessionVariant::Elevation => YELLOW,
    }
}

pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
