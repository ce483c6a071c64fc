use thiserror::Error;

use super::easing::Ease;
use super::props::{Frame, Prop, PropertySet};

/// Slack used when deciding whether an instruction has reached its end.
const END_EPSILON: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("instruction at {at} starts before the previous one at {previous}")]
    OutOfOrder { at: f64, previous: f64 },
    #[error("invalid start position: {0}")]
    InvalidPosition(f64),
    #[error("invalid duration: {0}")]
    InvalidDuration(f64),
}

#[derive(Clone, Debug)]
struct Instruction {
    target: usize,
    from: PropertySet,
    to: PropertySet,
    at: f64,
    duration: f64,
    ease: Ease,
}

impl Instruction {
    fn end(&self) -> f64 {
        self.at + self.duration
    }

    fn local_progress(&self, time: f64) -> f64 {
        if self.duration <= 0.0 || time >= self.end() - END_EPSILON {
            1.0
        } else {
            ((time - self.at) / self.duration).clamp(0.0, 1.0)
        }
    }
}

/// Ordered property-animation instructions keyed to a progress value.
///
/// Positions and durations share one abstract unit; [`Timeline::resolve`]
/// maps progress in `[0, 1]` onto `[0, duration]`. Start positions must be
/// non-decreasing in authoring order.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    initial: Frame,
    instructions: Vec<Instruction>,
    min_length: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authors the pre-animation state of `target`.
    pub fn set(&mut self, target: usize, props: PropertySet) -> &mut Self {
        self.initial.entry(target).or_default().merge(&props);
        self
    }

    /// Tweens `target` from whatever it holds when this instruction starts.
    pub fn to(
        &mut self,
        target: usize,
        props: PropertySet,
        at: f64,
        duration: f64,
        ease: Ease,
    ) -> Result<&mut Self, TimelineError> {
        let mut from = PropertySet::new();
        for (prop, _) in props.iter() {
            from.insert(prop, self.settled_value(target, prop));
        }
        self.push(target, from, props, at, duration, ease)
    }

    /// Tweens `target` between explicit values. Properties without an
    /// initial value take `from` as their pre-state.
    pub fn from_to(
        &mut self,
        target: usize,
        from: PropertySet,
        to: PropertySet,
        at: f64,
        duration: f64,
        ease: Ease,
    ) -> Result<&mut Self, TimelineError> {
        self.push(target, from, to, at, duration, ease)
    }

    /// Pads the timeline so its duration is at least `length`.
    pub fn pad_to(&mut self, length: f64) -> &mut Self {
        if length.is_finite() {
            self.min_length = self.min_length.max(length);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.instructions
            .iter()
            .map(Instruction::end)
            .fold(self.min_length, f64::max)
    }

    /// Values of every target for a progress in `[0, 1]`.
    pub fn resolve(&self, progress: f64) -> Frame {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.resolve_at(progress * self.duration())
    }

    /// Values of every target at an absolute timeline position.
    ///
    /// Instructions that have not started leave the target untouched;
    /// started ones write their eased value, last write wins.
    pub fn resolve_at(&self, time: f64) -> Frame {
        let mut frame = self.initial.clone();

        for ins in &self.instructions {
            if time < ins.at {
                // starts are sorted, nothing after this has begun either
                break;
            }
            let eased = ins.ease.apply(ins.local_progress(time));
            let entry = frame.entry(ins.target).or_default();
            for (prop, to) in ins.to.iter() {
                let from = ins.from.get(prop).unwrap_or(to);
                entry.insert(prop, from + (to - from) * eased);
            }
        }

        frame
    }

    fn push(
        &mut self,
        target: usize,
        from: PropertySet,
        to: PropertySet,
        at: f64,
        duration: f64,
        ease: Ease,
    ) -> Result<&mut Self, TimelineError> {
        if !at.is_finite() || at < 0.0 {
            return Err(TimelineError::InvalidPosition(at));
        }
        if !duration.is_finite() || duration < 0.0 {
            return Err(TimelineError::InvalidDuration(duration));
        }
        if let Some(previous) = self.instructions.last().map(|ins| ins.at) {
            if at < previous {
                return Err(TimelineError::OutOfOrder { at, previous });
            }
        }

        let initial = self.initial.entry(target).or_default();
        for (prop, value) in from.iter() {
            if !initial.contains(prop) {
                initial.insert(prop, value);
            }
        }

        self.instructions.push(Instruction {
            target,
            from,
            to,
            at,
            duration,
            ease,
        });
        Ok(self)
    }

    /// Value `prop` of `target` holds once every instruction so far has finished.
    fn settled_value(&self, target: usize, prop: Prop) -> f64 {
        self.instructions
            .iter()
            .rev()
            .filter(|ins| ins.target == target)
            .find_map(|ins| ins.to.get(prop))
            .or_else(|| self.initial.get(&target).and_then(|set| set.get(prop)))
            .unwrap_or_else(|| resting_value(prop))
    }
}

/// What an element shows for `prop` when nothing has styled it.
fn resting_value(prop: Prop) -> f64 {
    match prop {
        Prop::Opacity | Prop::Scale | Prop::ScaleY => 1.0,
        Prop::Y | Prop::Rotation | Prop::RotationX | Prop::Blur => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opacity(v: f64) -> PropertySet {
        PropertySet::new().with(Prop::Opacity, v)
    }

    fn value(frame: &Frame, target: usize, prop: Prop) -> f64 {
        frame[&target].get(prop).unwrap()
    }

    #[test]
    fn empty_timeline_resolves_to_initial_state() {
        let mut tl = Timeline::new();
        tl.set(0, opacity(0.3));
        assert!(tl.is_empty());
        assert_eq!(tl.duration(), 0.0);
        assert_eq!(value(&tl.resolve(0.7), 0, Prop::Opacity), 0.3);
    }

    #[test]
    fn boundaries_hit_authored_initial_and_terminal_states() {
        let mut tl = Timeline::new();
        tl.set(0, opacity(0.0)).set(1, opacity(0.0));
        tl.to(0, opacity(1.0), 0.5, 1.0, Ease::Power2Out).unwrap();
        tl.to(1, opacity(1.0), 1.0, 0.75, Ease::BackOut(1.2)).unwrap();

        let start = tl.resolve(0.0);
        assert_eq!(value(&start, 0, Prop::Opacity), 0.0);
        assert_eq!(value(&start, 1, Prop::Opacity), 0.0);

        let end = tl.resolve(1.0);
        assert_eq!(value(&end, 0, Prop::Opacity), 1.0);
        assert_eq!(value(&end, 1, Prop::Opacity), 1.0);
    }

    #[test]
    fn resolution_is_independent_of_previous_queries() {
        let mut tl = Timeline::new();
        tl.set(0, PropertySet::new().with(Prop::Y, 100.0));
        tl.to(0, PropertySet::new().with(Prop::Y, 0.0), 0.0, 1.0, Ease::Power2InOut)
            .unwrap();
        tl.to(0, PropertySet::new().with(Prop::Y, -50.0), 1.0, 1.0, Ease::None)
            .unwrap();

        let direct = tl.resolve(0.4);
        for p in [1.0, 0.0, 0.9, 0.1, 0.55] {
            tl.resolve(p);
        }
        assert_eq!(tl.resolve(0.4), direct);
    }

    #[test]
    fn to_starts_from_the_previous_terminal_value() {
        let mut tl = Timeline::new();
        tl.set(0, PropertySet::new().with(Prop::Y, 100.0));
        tl.to(0, PropertySet::new().with(Prop::Y, 0.0), 0.0, 1.0, Ease::None)
            .unwrap();
        tl.to(0, PropertySet::new().with(Prop::Y, -100.0), 1.0, 1.0, Ease::None)
            .unwrap();

        assert!((value(&tl.resolve_at(0.5), 0, Prop::Y) - 50.0).abs() < 1e-9);
        assert!((value(&tl.resolve_at(1.5), 0, Prop::Y) + 50.0).abs() < 1e-9);
    }

    #[test]
    fn overlapping_instructions_last_authored_wins() {
        let mut tl = Timeline::new();
        tl.set(0, opacity(0.0));
        tl.to(0, opacity(1.0), 0.0, 2.0, Ease::None).unwrap();
        tl.from_to(0, opacity(0.5), opacity(0.25), 1.0, 1.0, Ease::None)
            .unwrap();

        assert!((value(&tl.resolve_at(0.5), 0, Prop::Opacity) - 0.25).abs() < 1e-9);
        assert!((value(&tl.resolve_at(1.0), 0, Prop::Opacity) - 0.5).abs() < 1e-9);
        assert!((value(&tl.resolve_at(2.0), 0, Prop::Opacity) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn from_to_supplies_pre_state_when_unset() {
        let mut tl = Timeline::new();
        tl.from_to(3, opacity(0.0), opacity(1.0), 2.0, 1.0, Ease::None)
            .unwrap();
        assert_eq!(value(&tl.resolve(0.0), 3, Prop::Opacity), 0.0);
    }

    #[test]
    fn out_of_order_start_is_rejected() {
        let mut tl = Timeline::new();
        tl.to(0, opacity(1.0), 1.0, 1.0, Ease::None).unwrap();
        let err = tl.to(1, opacity(1.0), 0.5, 1.0, Ease::None).unwrap_err();
        assert_eq!(err, TimelineError::OutOfOrder { at: 0.5, previous: 1.0 });
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let mut tl = Timeline::new();
        assert!(matches!(
            tl.to(0, opacity(1.0), f64::NAN, 1.0, Ease::None),
            Err(TimelineError::InvalidPosition(_))
        ));
        assert!(matches!(
            tl.to(0, opacity(1.0), 0.0, -1.0, Ease::None),
            Err(TimelineError::InvalidDuration(_))
        ));
        assert!(tl.is_empty());
    }

    #[test]
    fn padding_extends_duration() {
        let mut tl = Timeline::new();
        tl.to(0, opacity(1.0), 0.0, 1.0, Ease::None).unwrap();
        tl.pad_to(4.0);
        assert_eq!(tl.duration(), 4.0);
        assert!((value(&tl.resolve(0.25), 0, Prop::Opacity) - 1.0).abs() < 1e-9);
    }
}
