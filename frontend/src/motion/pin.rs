use super::scroll_range::{Phase, ScrollRange};

/// Whether a container is held in the viewport, and how far it has
/// travelled with the viewport so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinState {
    pub engaged: bool,
    /// Distance the container has been carried, in px. Zero before the
    /// range, the full range length after it.
    pub offset: f64,
}

/// A phase change reported by [`PinController::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinTransition {
    pub from: Phase,
    pub to: Phase,
}

/// Tracks a container held fixed over a scroll range.
///
/// The offset is `scroll - start` clamped to the range, the same travel a
/// sticky container of viewport height gets inside a trigger one range
/// longer than the viewport.
#[derive(Clone, Debug)]
pub struct PinController {
    anticipate_px: f64,
    phase: Option<Phase>,
    state: PinState,
}

impl PinController {
    pub fn new(anticipate_px: f64) -> Self {
        Self {
            anticipate_px: anticipate_px.max(0.0),
            phase: None,
            state: PinState {
                engaged: false,
                offset: 0.0,
            },
        }
    }

    pub fn state(&self) -> PinState {
        self.state
    }

    /// Recomputes pin state for `scroll_y`, returning the phase change if any.
    pub fn update(&mut self, range: &ScrollRange, scroll_y: f64) -> Option<PinTransition> {
        let phase = range.phase(scroll_y);
        // Engaging early only flips the flag, the clamp keeps offset at 0.
        let engaged = phase == Phase::In
            || (phase == Phase::Before && scroll_y >= range.start() - self.anticipate_px);
        let offset = (scroll_y - range.start()).clamp(0.0, range.span());

        self.state = PinState { engaged, offset };

        let previous = self.phase.replace(phase);
        match previous {
            Some(from) if from != phase => Some(PinTransition { from, to: phase }),
            _ => None,
        }
    }
}
