/// Width assumed for one logo set until it has been measured.
pub const DEFAULT_SET_WIDTH: f64 = 1000.0;

/// Scroll velocity (px/s) that maps to a velocity factor of `VELOCITY_GAIN`.
const VELOCITY_REFERENCE: f64 = 1000.0;
const VELOCITY_GAIN: f64 = 5.0;

/// Longest spring integration step, in seconds.
const SPRING_SUBSTEP: f64 = 0.004;

/// Maps `value` into `[min, max)`, re-entering from the opposite edge.
/// An empty band collapses everything onto `min`.
pub fn wrap(min: f64, max: f64, value: f64) -> f64 {
    let range = max - min;
    if range == 0.0 || !range.is_finite() || !value.is_finite() {
        return min;
    }
    (value - min).rem_euclid(range) + min
}

/// A damped spring chasing a moving target.
#[derive(Clone, Debug)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    value: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: mass.max(f64::EPSILON),
            value: 0.0,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Integrates `dt` seconds toward `target` with semi-implicit Euler.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            let force = -self.stiffness * (self.value - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }
}

/// Samples scroll offsets and reports their rate of change in px/s.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    last: Option<f64>,
}

impl VelocityTracker {
    pub fn sample(&mut self, scroll_y: f64, dt: f64) -> f64 {
        let velocity = match self.last {
            Some(last) if dt > 0.0 => (scroll_y - last) / dt,
            _ => 0.0,
        };
        self.last = Some(scroll_y);
        velocity
    }
}

/// An endlessly scrolling strip of repeated content.
///
/// The accumulator is unbounded; [`Marquee::x`] wraps it into
/// `[-set_width, 0]` so consecutive copies line up seamlessly.
#[derive(Clone, Debug)]
pub struct Marquee {
    speed: f64,
    direction: f64,
    scroll_influence: bool,
    accumulated: f64,
    set_width: f64,
    scroll: VelocityTracker,
    smooth_velocity: Spring,
}

impl Marquee {
    /// `base_velocity` is in px/s; its sign picks the initial direction.
    pub fn new(base_velocity: f64, scroll_influence: bool) -> Self {
        Self {
            speed: base_velocity.abs(),
            direction: if base_velocity >= 0.0 { 1.0 } else { -1.0 },
            scroll_influence,
            accumulated: 0.0,
            set_width: 0.0,
            scroll: VelocityTracker::default(),
            smooth_velocity: Spring::new(400.0, 50.0, 1.0),
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.set_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    }

    /// Width used for wrapping; unmeasured sets fall back to a default.
    pub fn wrap_width(&self) -> f64 {
        if self.set_width > 0.0 {
            self.set_width
        } else {
            DEFAULT_SET_WIDTH
        }
    }

    /// Smoothed scroll velocity mapped linearly (unclamped) onto a speed factor.
    pub fn velocity_factor(&self) -> f64 {
        self.smooth_velocity.value() / VELOCITY_REFERENCE * VELOCITY_GAIN
    }

    /// Advances one frame of `dt_ms` milliseconds with the page at `scroll_y`.
    /// Returns the wrapped translation in px.
    pub fn step(&mut self, dt_ms: f64, scroll_y: f64) -> f64 {
        let dt = (dt_ms / 1000.0).max(0.0);

        let mut move_by = self.direction * self.speed * dt;

        if self.scroll_influence {
            let raw = self.scroll.sample(scroll_y, dt);
            self.smooth_velocity.step(raw, dt);
            let factor = self.velocity_factor();

            // Scrolling down drives the strip right, scrolling up drives it left.
            if factor < 0.0 {
                self.direction = -1.0;
            } else if factor > 0.0 {
                self.direction = 1.0;
            }
            move_by += self.direction * self.speed * factor.abs();
        }

        self.accumulated += move_by;
        self.x()
    }

    pub fn x(&self) -> f64 {
        wrap(-self.wrap_width(), 0.0, self.accumulated)
    }
}

/// Whether free-running effects may start, given the user's motion preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn allows_continuous_motion(self) -> bool {
        self == MotionPreference::Full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[test]
    fn wrap_stays_inside_band_for_any_magnitude() {
        for value in [0.0, -1.0, 1.0, -999.5, 1e6, -1e6, 1e15, -1e15, 123_456.789] {
            let wrapped = wrap(-1000.0, 0.0, value);
            assert!((-1000.0..=0.0).contains(&wrapped), "{} -> {}", value, wrapped);
        }
    }

    #[test]
    fn wrap_re_enters_from_the_opposite_edge() {
        assert_eq!(wrap(-1000.0, 0.0, 10.0), -990.0);
        assert_eq!(wrap(-1000.0, 0.0, -1010.0), -10.0);
    }

    #[test]
    fn wrap_with_empty_band_returns_min() {
        assert_eq!(wrap(0.0, 0.0, 42.0), 0.0);
        assert_eq!(wrap(-5.0, -5.0, f64::MAX), -5.0);
    }

    #[test]
    fn unmeasured_width_uses_default() {
        let mut marquee = Marquee::new(10.0, false);
        marquee.set_width(0.0);
        assert_eq!(marquee.wrap_width(), DEFAULT_SET_WIDTH);
        let x = marquee.step(FRAME_MS, 0.0);
        assert!(x.is_finite());
        assert!((-DEFAULT_SET_WIDTH..=0.0).contains(&x));
    }

    #[test]
    fn base_motion_follows_sign_of_velocity() {
        let mut right = Marquee::new(10.0, false);
        right.set_width(500.0);
        let mut left = Marquee::new(-10.0, false);
        left.set_width(500.0);

        // one second of frames: 10px either way, wrapped into [-500, 0]
        for _ in 0..60 {
            right.step(FRAME_MS, 0.0);
            left.step(FRAME_MS, 0.0);
        }
        assert!((right.x() - -490.0).abs() < 1e-6);
        assert!((left.x() - -10.0).abs() < 1e-6);
    }

    #[test]
    fn scrolling_up_flips_direction_and_scrolling_down_restores_it() {
        const WIDTH: f64 = 1e6;
        // signed displacement of one frame, unwrapped
        let moved = |before: f64, after: f64| {
            let d = (after - before).rem_euclid(WIDTH);
            if d > WIDTH / 2.0 {
                d - WIDTH
            } else {
                d
            }
        };

        let mut marquee = Marquee::new(3.0, true);
        marquee.set_width(WIDTH);

        let mut y = 5000.0;
        marquee.step(FRAME_MS, y);
        for _ in 0..30 {
            y -= 40.0;
            marquee.step(FRAME_MS, y);
        }
        // scrolling has stopped, the strip keeps the direction it was given
        let before = marquee.x();
        assert!(moved(before, marquee.step(FRAME_MS, y)) < 0.0);

        for _ in 0..60 {
            y += 40.0;
            marquee.step(FRAME_MS, y);
        }
        let before = marquee.x();
        assert!(moved(before, marquee.step(FRAME_MS, y)) > 0.0);
    }

    #[test]
    fn scroll_influence_speeds_the_strip_up() {
        let mut calm = Marquee::new(3.0, true);
        let mut pushed = Marquee::new(3.0, true);
        calm.set_width(1e9);
        pushed.set_width(1e9);

        let mut y = 0.0;
        for _ in 0..30 {
            calm.step(FRAME_MS, 0.0);
            y += 30.0;
            pushed.step(FRAME_MS, y);
        }
        let calm_moved = calm.x() + 1e9;
        let pushed_moved = pushed.x() + 1e9;
        assert!(pushed_moved > calm_moved);
    }

    #[test]
    fn spring_settles_on_constant_target() {
        let mut spring = Spring::new(400.0, 50.0, 1.0);
        for _ in 0..300 {
            spring.step(1000.0, 1.0 / 60.0);
        }
        assert!((spring.value() - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn reduced_motion_blocks_continuous_effects() {
        assert!(MotionPreference::Full.allows_continuous_motion());
        assert!(!MotionPreference::Reduced.allows_continuous_motion());
    }

    #[test]
    fn remeasuring_after_load_rewraps_at_the_new_period() {
        let mut marquee = Marquee::new(-300.0, false);
        // before the logos load only the gaps are measured
        marquee.set_width(96.0);
        for _ in 0..30 {
            let x = marquee.step(FRAME_MS, 0.0);
            assert!((-96.0..=0.0).contains(&x));
        }

        marquee.set_width(1200.0);
        let mut previous = marquee.x();
        let mut jumps = 0;
        for _ in 0..240 {
            let x = marquee.step(FRAME_MS, 0.0);
            assert!((-1200.0..=0.0).contains(&x));
            if (x - previous).abs() > 100.0 {
                jumps += 1;
            }
            previous = x;
        }
        // 300px/s for 4s crosses a 1200px band at most once
        assert!(jumps <= 1);
    }

    #[test]
    fn a_marquee_never_stepped_keeps_its_first_frame() {
        let mut marquee = Marquee::new(10.0, true);
        marquee.set_width(640.0);
        // an untouched accumulator sits on the band edge, the same picture as 0
        assert_eq!(marquee.x(), -640.0);
        assert_eq!(marquee.x(), marquee.x());
    }
}
