/// Exponential ease-in-out over normalized progress `p` in [0, 1].
pub fn ease_in_out_expo(p: f64) -> f64 {
    if p <= 0.0 {
        return 0.0;
    }
    if p >= 1.0 {
        return 1.0;
    }
    if p < 0.5 {
        0.5 * 2f64.powf(20.0 * p - 10.0)
    } else {
        0.5 * (2.0 - 2f64.powf(-20.0 * p + 10.0))
    }
}

/// A scroll from one vertical offset to another over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self { from, to, duration_ms }
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return self.to;
        }
        let progress = (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in_out_expo(progress)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expo_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_expo(0.0), 0.0);
        assert_eq!(ease_in_out_expo(1.0), 1.0);
        assert!((ease_in_out_expo(0.5) - 0.5).abs() < 1e-12);
        assert!(ease_in_out_expo(0.1) < 0.01);
        assert!(ease_in_out_expo(0.9) > 0.99);
    }

    #[test]
    fn expo_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = ease_in_out_expo(i as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn tween_lands_on_target() {
        let tween = ScrollTween::new(1200.0, 0.0, 1500);
        assert_eq!(tween.position_at(0.0), 1200.0);
        assert!((tween.position_at(750.0) - 600.0).abs() < 1e-9);
        assert_eq!(tween.position_at(1500.0), 0.0);
        assert_eq!(tween.position_at(4000.0), 0.0);
        assert!(!tween.is_finished(1499.0));
        assert!(tween.is_finished(1500.0));
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = ScrollTween::new(10.0, 300.0, 0);
        assert_eq!(tween.position_at(0.0), 300.0);
        assert!(tween.is_finished(0.0));
    }
}
