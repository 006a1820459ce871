use std::time::Duration;

/// Endless horizontal scroll for a track whose items are laid out twice.
///
/// The track slides left by `travel` of its own width over one `period` and
/// then jumps back; because the second half repeats the first, the jump is
/// invisible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    pub period: Duration,
    /// Fraction of the track width covered per period
    pub travel: f32,
}

impl Marquee {
    /// The project carousel: half the track every 40 seconds.
    pub const PROJECTS: Self = Self {
        period: Duration::from_secs(40),
        travel: 0.5,
    };

    pub fn new(period: Duration, travel: f32) -> Self {
        Self { period, travel }
    }

    /// Position in the current loop, in `[0, 1)`.
    pub fn phase(&self, elapsed: Duration) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        let period = self.period.as_nanos();
        (elapsed.as_nanos() % period) as f32 / period as f32
    }

    /// Horizontal translation as a fraction of the track width (`0` to
    /// `-travel`).
    pub fn offset(&self, elapsed: Duration) -> f32 {
        -self.travel * self.phase(elapsed)
    }

    /// Horizontal translation in page units for a track `track_width` wide.
    pub fn offset_px(&self, track_width: f32, elapsed: Duration) -> f32 {
        self.offset(elapsed) * track_width
    }
}

impl Default for Marquee {
    fn default() -> Self {
        Self::PROJECTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let marquee = Marquee::PROJECTS;
        assert_eq!(marquee.offset(Duration::ZERO), 0.0);
        assert!((marquee.offset(Duration::from_secs(10)) + 0.125).abs() < 1e-6);
        assert!((marquee.offset(Duration::from_secs(20)) + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_wraps_each_period() {
        let marquee = Marquee::PROJECTS;
        assert_eq!(marquee.offset(Duration::from_secs(40)), 0.0);
        assert_eq!(
            marquee.offset(Duration::from_secs(50)),
            marquee.offset(Duration::from_secs(10))
        );
        assert!(marquee.offset(Duration::from_millis(39_999)) > -0.5);
    }

    #[test]
    fn test_offset_px() {
        let marquee = Marquee::new(Duration::from_secs(4), 0.5);
        assert!((marquee.offset_px(2400.0, Duration::from_secs(2)) + 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_period_is_still() {
        let marquee = Marquee::new(Duration::ZERO, 0.5);
        assert_eq!(marquee.offset(Duration::from_secs(3)), 0.0);
    }
}
