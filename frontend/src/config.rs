use crate::animation::line_draw::{LineDrawConfig, Rescale};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn newsletter_url() -> String {
    format!("{}/newsletter", get_backend_url())
}

/// Scroll offset (px) past which the header sticks and back-to-top shows.
pub const HEADER_FIXED_THRESHOLD: f64 = 100.0;

/// Subtracted from the header height when it is not yet fixed.
pub const HEADER_UNFIXED_ALLOWANCE: f64 = 20.0;

pub const SMOOTH_SCROLL_MS: u32 = 1500;
pub const SMOOTH_SCROLL_FRAME_MS: u32 = 10;

pub const COUNTER_DELAY_MS: u32 = 10;
pub const COUNTER_TIME_MS: u32 = 1000;

/// Below this window width image/title pairs swap order.
pub const LAYOUT_FLIP_BREAKPOINT: f64 = 990.0;

pub const HOME_LINE_DRAW: LineDrawConfig = LineDrawConfig {
    tick_ms: 10,
    smoothing: 0.1,
    completion_threshold: 0.99,
    rescale: Rescale::REFINED,
};
