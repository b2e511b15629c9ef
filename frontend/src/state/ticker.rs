use crate::config;

/// Seconds needed to scroll `rendered_width_px` at the configured ticker speed.
pub fn compute_duration(rendered_width_px: f64) -> f64 {
    rendered_width_px / config::TICKER_SPEED_PX_PER_SEC
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickerConfig {
    pub content_px_width: f64,
    pub animation_duration_secs: f64,
}

impl TickerConfig {
    pub fn from_width(content_px_width: f64) -> Self {
        Self {
            content_px_width,
            animation_duration_secs: compute_duration(content_px_width),
        }
    }

    /// Value for the element's CSS `animation` property.
    pub fn animation(&self) -> String {
        format!("ticker-scroll {}s linear infinite", self.animation_duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_width_over_speed() {
        assert_eq!(compute_duration(1_000.0), 20.0);
        assert_eq!(compute_duration(0.0), 0.0);
    }

    #[test]
    fn duration_scales_linearly() {
        for w in [1.0, 37.5, 640.0, 2_345.0] {
            assert!((compute_duration(2.0 * w) - 2.0 * compute_duration(w)).abs() < 1e-9);
        }
    }

    #[test]
    fn animation_uses_the_computed_duration() {
        let ticker = TickerConfig::from_width(2_500.0);
        assert_eq!(ticker.animation_duration_secs, 50.0);
        assert_eq!(ticker.animation(), "ticker-scroll 50s linear infinite");
    }
}
