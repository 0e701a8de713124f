//! Page-local scroll position

/// Offset past which the navigation bar switches to its scrolled style
pub const NAV_SCROLLED_OFFSET: f64 = 80.0;

/// Parallax rate of the home page hero pattern
pub const HERO_PARALLAX_RATE: f64 = -0.3;

/// Vertical scroll position owned by a single mounted component
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
}

impl ScrollState {
    pub fn new(offset: f64) -> Self {
        let mut state = Self::default();
        state.update(offset);
        state
    }

    /// Record a new position. Negative and non-finite values (overscroll
    /// bounce on touch devices) are treated as the top of the page.
    pub fn update(&mut self, offset: f64) {
        self.offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Vertical translation for a layer moving at `rate` times the scroll speed
    pub fn parallax_offset(&self, rate: f64) -> f64 {
        self.offset * rate
    }

    pub fn is_past(&self, threshold: f64) -> bool {
        self.offset > threshold
    }

    /// CSS transform for a parallax layer
    pub fn parallax_transform(&self, rate: f64) -> String {
        format!("translateY({}px)", self.parallax_offset(rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax() {
        let state = ScrollState::new(200.0);
        assert_eq!(state.parallax_offset(HERO_PARALLAX_RATE), -60.0);
        assert_eq!(state.parallax_transform(HERO_PARALLAX_RATE), "translateY(-60px)");
    }

    #[test]
    fn test_nav_threshold() {
        assert!(!ScrollState::new(NAV_SCROLLED_OFFSET).is_past(NAV_SCROLLED_OFFSET));
        assert!(ScrollState::new(81.0).is_past(NAV_SCROLLED_OFFSET));
    }

    #[test]
    fn test_overscroll_clamped() {
        assert_eq!(ScrollState::new(-35.0).offset(), 0.0);
        assert_eq!(ScrollState::new(f64::NAN).offset(), 0.0);
    }
}
