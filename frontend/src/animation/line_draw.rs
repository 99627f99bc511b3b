use std::fmt;

/// Linear rescaling of the smoothed ratio before it becomes a draw length.
///
/// The constants depend on where the path visually starts and ends on a
/// given page layout, so they are configuration rather than fixed law.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rescale {
    pub gain: f64,
    pub bias: f64,
}

impl Rescale {
    /// `f(r) = r * 1.8`
    pub const LEGACY: Rescale = Rescale { gain: 1.8, bias: 0.0 };
    /// `f(r) = r * 2.1 - 0.15`
    pub const REFINED: Rescale = Rescale { gain: 2.1, bias: -0.15 };

    pub fn apply(&self, ratio: f64) -> f64 {
        ratio * self.gain + self.bias
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineDrawConfig {
    pub tick_ms: u32,
    pub smoothing: f64,
    pub completion_threshold: f64,
    pub rescale: Rescale,
}

impl Default for LineDrawConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            smoothing: 0.1,
            completion_threshold: 0.99,
            rescale: Rescale::LEGACY,
        }
    }
}

/// Length of the rendered path, read once when the animator starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathGeometry {
    pub total_length: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DashArray {
    Pattern(f64),
    None,
}

impl fmt::Display for DashArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashArray::Pattern(len) => write!(f, "{} {}", len, len),
            DashArray::None => f.write_str("none"),
        }
    }
}

/// The two style values written to the path on every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub dash_array: DashArray,
    pub dash_offset: f64,
}

impl PathGeometry {
    pub fn new(total_length: f64) -> Self {
        let total_length = if total_length.is_finite() { total_length.max(0.0) } else { 0.0 };
        Self { total_length }
    }

    /// Style that renders the path fully hidden.
    pub fn hidden(&self) -> StrokeStyle {
        StrokeStyle {
            dash_array: DashArray::Pattern(self.total_length),
            dash_offset: self.total_length,
        }
    }
}

/// How far through the page the user has scrolled.
///
/// A page that cannot scroll, or any layout that yields a non-finite
/// value, reads as 0. Overscroll is clamped into [0, 1].
pub fn scroll_ratio(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let ratio = scroll_top / scrollable;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Shared between the scroll listener, which only writes `target_ratio`,
/// and the timer, which only writes `current_ratio`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub target_ratio: f64,
    pub current_ratio: f64,
}

impl AnimationState {
    pub fn set_target(&mut self, ratio: f64) {
        self.target_ratio = if ratio.is_finite() { ratio } else { 0.0 };
    }

    /// Moves `current_ratio` a `smoothing` fraction of the way to the target.
    pub fn step(&mut self, smoothing: f64) -> f64 {
        self.current_ratio += (self.target_ratio - self.current_ratio) * smoothing;
        self.current_ratio
    }

    pub fn tick(&mut self, config: &LineDrawConfig, geometry: &PathGeometry) -> StrokeStyle {
        let current = self.step(config.smoothing);
        stroke_for(current, config, geometry)
    }
}

pub fn stroke_for(ratio: f64, config: &LineDrawConfig, geometry: &PathGeometry) -> StrokeStyle {
    let total = geometry.total_length;
    let draw_length = total * config.rescale.apply(ratio);
    let dash_offset = if draw_length.is_finite() { total - draw_length } else { total };
    let dash_array = if ratio >= config.completion_threshold {
        DashArray::None
    } else {
        DashArray::Pattern(total)
    };
    StrokeStyle { dash_array, dash_offset }
}
