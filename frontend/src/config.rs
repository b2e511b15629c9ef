use log::Level;

/// Space kept free above a section when scrolling to it, so the sticky header
/// does not cover the heading.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Apparent speed of the breaking-news ticker.
pub const TICKER_SPEED_PX_PER_SEC: f64 = 50.0;

pub const SEARCH_DELAY_MS: u32 = 1_000;
pub const INQUIRY_DELAY_MS: u32 = 1_500;

pub const TOAST_LIFETIME_MS: u32 = 4_000;
pub const MAX_VISIBLE_TOASTS: usize = 4;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
