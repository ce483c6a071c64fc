/// Easing curves applied to an instruction's local progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Ease {
    /// Linear.
    #[default]
    None,
    Power2Out,
    Power2InOut,
    /// Overshoots past the target by `overshoot` before settling.
    BackOut(f64),
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(2),
            Ease::Power2InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [Ease::None, Ease::Power2Out, Ease::Power2InOut, Ease::BackOut(1.2)];

    #[test]
    fn every_curve_is_pinned_at_both_ends() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{:?} at 0", ease);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{:?} at 1", ease);
        }
    }

    #[test]
    fn input_outside_unit_interval_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-3.0), 0.0);
        assert_eq!(Ease::Power2Out.apply(7.0), 1.0);
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.2).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn power2_in_out_is_symmetric_around_midpoint() {
        let a = Ease::Power2InOut.apply(0.25);
        let b = Ease::Power2InOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-12);
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
