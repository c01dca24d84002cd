/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Total hours color:
/// over the weekly limit → red
/// zero → grey
/// otherwise → reset
pub fn color_for_total(total: f64, max_weekly: f64) -> &'static str {
    if total > max_weekly {
        RED
    } else if total == 0.0 {
        GREY
    } else {
        RESET
    }
}
