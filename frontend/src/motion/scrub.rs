/// Differences below this are treated as caught up.
const SETTLE_EPSILON: f64 = 1e-4;

/// Smooths applied progress toward a scroll-derived target.
///
/// `lag` is the time constant in seconds: after `lag` seconds roughly 63%
/// of any gap has been closed. A lag of zero applies targets immediately.
#[derive(Clone, Debug)]
pub struct Scrubber {
    lag: f64,
    current: f64,
    target: f64,
}

impl Scrubber {
    pub fn new(lag: f64) -> Self {
        Self {
            lag: lag.max(0.0),
            current: 0.0,
            target: 0.0,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jumps straight to the target.
    pub fn snap(&mut self) {
        self.current = self.target;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Fraction of the remaining gap closed by a step of `dt` seconds.
    pub fn step_fraction(&self, dt: f64) -> f64 {
        if self.lag <= 0.0 {
            1.0
        } else {
            1.0 - (-dt.max(0.0) / self.lag).exp()
        }
    }

    /// Advances by `dt` seconds and returns the new value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let gap = self.target - self.current;
        if gap.abs() < SETTLE_EPSILON {
            self.current = self.target;
        } else {
            self.current += gap * self.step_fraction(dt);
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f64 = 1.0 / 60.0;

    #[test]
    fn converges_and_reports_settled() {
        let mut scrub = Scrubber::new(0.6);
        scrub.set_target(1.0);
        for _ in 0..600 {
            scrub.advance(FRAME);
        }
        assert!(scrub.is_settled());
        assert_eq!(scrub.current(), 1.0);
    }

    #[test]
    fn one_frame_moves_only_a_fraction_of_the_gap() {
        let mut scrub = Scrubber::new(0.6);
        scrub.set_target(1.0);
        let after = scrub.advance(FRAME);
        assert!(after > 0.0 && after < 0.05);
    }

    #[test]
    fn zero_lag_applies_immediately() {
        let mut scrub = Scrubber::new(0.0);
        scrub.set_target(0.4);
        assert_eq!(scrub.advance(FRAME), 0.4);
    }

    #[test]
    fn non_finite_targets_are_ignored() {
        let mut scrub = Scrubber::new(0.6);
        scrub.set_target(0.3);
        scrub.set_target(f64::NAN);
        scrub.snap();
        assert_eq!(scrub.current(), 0.3);
    }
}
