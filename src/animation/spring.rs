/// Configuration for spring physics animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Mass of the spring (default: 1.0)
    pub mass: f32,
    /// Stiffness of the spring, how hard it pulls toward the target
    pub stiffness: f32,
    /// Damping coefficient, how much energy is lost per second
    pub damping: f32,
}

impl SpringConfig {
    /// Heavily overdamped spring used by the stats counters. Creeps up to the
    /// target without overshoot.
    pub const TICKER: Self = Self {
        mass: 1.0,
        stiffness: 100.0,
        damping: 60.0,
    };

    /// Default spring with pleasant overshoot
    pub const DEFAULT: Self = Self {
        mass: 1.0,
        stiffness: 180.0,
        damping: 11.0,
    };

    /// Bouncy spring with more overshoot
    pub const BOUNCY: Self = Self {
        mass: 1.0,
        stiffness: 200.0,
        damping: 10.0,
    };

    /// Snappy spring with quick response
    pub const SNAPPY: Self = Self {
        mass: 1.0,
        stiffness: 250.0,
        damping: 14.0,
    };

    /// Gentle spring with subtle motion
    pub const GENTLE: Self = Self {
        mass: 1.0,
        stiffness: 120.0,
        damping: 15.0,
    };

    /// Damping ratio relative to critical damping (`1.0` = critical).
    ///
    /// Values above one never overshoot when starting from rest.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Whether the configuration can be integrated at all.
    pub fn is_valid(&self) -> bool {
        self.mass.is_finite()
            && self.stiffness.is_finite()
            && self.damping.is_finite()
            && self.mass > 0.0
            && self.stiffness > 0.0
            && self.damping >= 0.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::TICKER
    }
}

/// Longest frame the integrator will honour. Longer gaps (a backgrounded tab,
/// a stalled host) are treated as this long.
pub const MAX_FRAME_DT: f32 = 0.1;

/// Largest single integration step. Frames are split into equal substeps no
/// longer than this so stiff or heavily damped springs stay stable.
pub const MAX_SUBSTEP: f32 = 1.0 / 120.0;

/// Advance `(position, velocity)` toward `target` by `dt` seconds.
///
/// Uses semi-implicit Euler, the same scheme as a per-frame spring step, but
/// subdivided so that `damping * h` stays well below the stability limit.
/// State is kept in `f64` so every `u32` target is exact and a substep's
/// movement never drops below the precision of the position.
pub(crate) fn integrate(
    position: f64,
    velocity: f64,
    target: f64,
    dt: f32,
    config: &SpringConfig,
) -> (f64, f64) {
    let dt = dt.clamp(0.0, MAX_FRAME_DT);

    // Skip if time hasn't advanced
    if dt < 1e-6 {
        return (position, velocity);
    }

    let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
    let h = f64::from(dt) / f64::from(substeps);
    let stiffness = f64::from(config.stiffness);
    let damping = f64::from(config.damping);
    let mass = f64::from(config.mass);

    let mut position = position;
    let mut velocity = velocity;
    for _ in 0..substeps {
        // Spring force: F = -k * x
        let displacement = position - target;
        let spring_force = -stiffness * displacement;

        // Damping force: F = -c * v
        let damping_force = -damping * velocity;

        let acceleration = (spring_force + damping_force) / mass;

        velocity += acceleration * h;
        position += velocity * h;
    }

    (position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &SpringConfig, target: f64, frames: usize) -> (f64, f64, f64) {
        let (mut position, mut velocity) = (0.0, 0.0);
        let mut max_position: f64 = 0.0;
        for _ in 0..frames {
            (position, velocity) = integrate(position, velocity, target, 1.0 / 60.0, config);
            max_position = max_position.max(position);
        }
        (position, velocity, max_position)
    }

    #[test]
    fn test_spring_reaches_target() {
        // 10 seconds at 60fps
        let (position, velocity, _) = run(&SpringConfig::TICKER, 200.0, 600);

        assert!(
            (position - 200.0).abs() < 0.01,
            "Spring should settle near target, got {}",
            position
        );
        assert!(velocity.abs() < 0.01);
    }

    #[test]
    fn test_ticker_spring_does_not_overshoot() {
        let (_, _, max_position) = run(&SpringConfig::TICKER, 98.0, 900);
        assert!(
            max_position <= 98.0,
            "Overdamped spring should not overshoot, max was {}",
            max_position
        );
        assert!(SpringConfig::TICKER.damping_ratio() > 1.0);
    }

    #[test]
    fn test_spring_overshoots() {
        let (_, _, max_position) = run(&SpringConfig::BOUNCY, 1.0, 120);

        // Bouncy spring should overshoot
        assert!(
            max_position > 1.0,
            "Bouncy spring should overshoot, max was {}",
            max_position
        );
    }

    #[test]
    fn test_large_target_keeps_moving() {
        // At this magnitude an f32 position stops changing well short of
        // the target while the velocity is still above the settle threshold
        let target = 1_000_000.0;
        let (position, velocity, _) = run(&SpringConfig::TICKER, target, 1800);
        assert!((position - target).abs() < 0.01, "stalled at {}", position);
        assert!(velocity.abs() < 0.01);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let capped = integrate(0.0, 0.0, 100.0, 5.0, &SpringConfig::TICKER);
        let max = integrate(0.0, 0.0, 100.0, MAX_FRAME_DT, &SpringConfig::TICKER);
        assert_eq!(capped, max);
    }

    #[test]
    fn test_zero_dt_is_noop() {
        assert_eq!(
            integrate(3.0, 1.5, 10.0, 0.0, &SpringConfig::TICKER),
            (3.0, 1.5)
        );
    }

    #[test]
    fn test_invalid_configs() {
        assert!(SpringConfig::TICKER.is_valid());
        assert!(!SpringConfig {
            mass: 0.0,
            ..SpringConfig::TICKER
        }
        .is_valid());
        assert!(!SpringConfig {
            stiffness: f32::NAN,
            ..SpringConfig::TICKER
        }
        .is_valid());
    }
}
