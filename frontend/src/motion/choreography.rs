use super::marquee::MotionPreference;
use super::pin::{PinController, PinState, PinTransition};
use super::props::Frame;
use super::scroll_range::{Layout, RangeEnd, ScrollRange};
use super::scrub::Scrubber;
use super::timeline::Timeline;

/// Tuning for one scroll-pinned scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneOptions {
    pub range_end: RangeEnd,
    /// Scrub lag in seconds.
    pub scrub: f64,
    /// How far before the range start the pin engages, in px.
    pub anticipate_px: f64,
}

impl SceneOptions {
    /// Reduced motion drops the scrub lag so scroll is applied as it arrives.
    pub fn for_motion(self, preference: MotionPreference) -> Self {
        match preference {
            MotionPreference::Full => self,
            MotionPreference::Reduced => Self { scrub: 0.0, ..self },
        }
    }

    /// Whether the scene has to be driven from a frame loop.
    pub fn needs_frames(&self) -> bool {
        self.scrub > 0.0
    }
}

/// Everything a scene needs to write for one update.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneFrame {
    pub progress: f64,
    pub values: Frame,
    pub pin: PinState,
    pub transition: Option<PinTransition>,
}

/// Binds a timeline and a pin to a scroll range.
///
/// Scroll input sets the target progress; [`ScrollChoreography::tick`]
/// scrubs toward it, resolves the timeline, then updates the pin.
#[derive(Clone, Debug)]
pub struct ScrollChoreography {
    options: SceneOptions,
    timeline: Timeline,
    range: Option<ScrollRange>,
    pin: PinController,
    scrub: Scrubber,
    scroll_y: f64,
}

impl ScrollChoreography {
    pub fn new(timeline: Timeline, options: SceneOptions) -> Self {
        Self {
            options,
            timeline,
            range: None,
            pin: PinController::new(options.anticipate_px),
            scrub: Scrubber::new(options.scrub),
            scroll_y: 0.0,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Swaps in a timeline rebuilt for new geometry. Applied progress is kept.
    pub fn set_timeline(&mut self, timeline: Timeline) {
        self.timeline = timeline;
    }

    /// Recomputes the range from fresh measurements and retargets progress.
    pub fn set_layout(&mut self, layout: &Layout) -> Option<ScrollRange> {
        self.range = ScrollRange::from_layout(layout, self.options.range_end);
        self.retarget();
        self.range
    }

    /// Records a new scroll offset. The pin follows scroll directly, only
    /// the timeline is scrubbed.
    pub fn scroll_to(&mut self, scroll_y: f64) -> Option<(PinState, Option<PinTransition>)> {
        if scroll_y.is_finite() {
            self.scroll_y = scroll_y;
        }
        self.retarget();
        let range = self.range?;
        let transition = self.pin.update(&range, self.scroll_y);
        Some((self.pin.state(), transition))
    }

    pub fn is_settled(&self) -> bool {
        self.scrub.is_settled()
    }

    pub fn needs_frames(&self) -> bool {
        self.options.needs_frames()
    }

    /// Advances the scrub by `dt` seconds. `None` while unmeasured.
    pub fn tick(&mut self, dt: f64) -> Option<SceneFrame> {
        let range = self.range?;
        let progress = self.scrub.advance(dt);
        Some(self.frame(range, progress))
    }

    /// Applies the target progress without smoothing.
    pub fn settle(&mut self) -> Option<SceneFrame> {
        let range = self.range?;
        self.scrub.snap();
        Some(self.frame(range, self.scrub.current()))
    }

    fn retarget(&mut self) {
        if let Some(range) = self.range {
            self.scrub.set_target(range.progress(self.scroll_y));
        }
    }

    fn frame(&mut self, range: ScrollRange, progress: f64) -> SceneFrame {
        let values = self.timeline.resolve(progress);
        let transition = self.pin.update(&range, self.scroll_y);
        SceneFrame {
            progress,
            values,
            pin: self.pin.state(),
            transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::easing::Ease;
    use crate::motion::props::{Prop, PropertySet};

    const FRAME: f64 = 1.0 / 60.0;

    fn options(scrub: f64) -> SceneOptions {
        SceneOptions {
            range_end: RangeEnd::ViewportMultiples(2.0),
            scrub,
            anticipate_px: 0.0,
        }
    }

    fn layout(viewport_height: f64) -> Layout {
        Layout {
            trigger_top: 500.0,
            trigger_height: 3.0 * viewport_height,
            viewport_height,
        }
    }

    fn fade_in() -> Timeline {
        let mut tl = Timeline::new();
        tl.set(0, PropertySet::new().with(Prop::Opacity, 0.0));
        tl.to(0, PropertySet::new().with(Prop::Opacity, 1.0), 0.0, 1.0, Ease::Power2Out)
            .unwrap();
        tl
    }

    #[test]
    fn unmeasured_scene_is_a_no_op() {
        let mut scene = ScrollChoreography::new(fade_in(), options(0.6));
        assert!(scene.scroll_to(900.0).is_none());
        assert!(scene.tick(FRAME).is_none());
        assert!(scene.settle().is_none());

        scene.set_layout(&layout(800.0));
        assert!(scene.settle().is_some());
    }

    #[test]
    fn backward_scroll_replays_the_same_state() {
        let mut scene = ScrollChoreography::new(fade_in(), options(0.0));
        scene.set_layout(&layout(800.0));

        scene.scroll_to(900.0);
        let forward = scene.settle().unwrap();

        for y in [1500.0, 2200.0, 4000.0, 1200.0] {
            scene.scroll_to(y);
            scene.settle();
        }
        scene.scroll_to(900.0);
        let back = scene.settle().unwrap();

        assert_eq!(forward.values, back.values);
        assert_eq!(forward.pin, back.pin);
        assert_eq!(forward.progress, back.progress);
    }

    #[test]
    fn resize_mid_scroll_moves_at_most_one_frame_of_scrub() {
        let mut scene = ScrollChoreography::new(fade_in(), options(0.6));
        scene.set_layout(&layout(800.0));
        scene.scroll_to(1300.0);
        let before = scene.settle().unwrap().progress;

        let range = scene.set_layout(&layout(600.0)).unwrap();
        let after = scene.tick(FRAME).unwrap().progress;

        let target = range.progress(1300.0);
        let max_step = (target - before).abs() * (1.0 - (-FRAME / 0.6f64).exp()) + 1e-12;
        assert!((after - before).abs() <= max_step);
        assert!(!scene.is_settled());
    }

    #[test]
    fn reduced_motion_applies_scroll_without_frames() {
        let full = options(0.6);
        assert!(full.for_motion(MotionPreference::Full).needs_frames());

        let reduced = full.for_motion(MotionPreference::Reduced);
        assert!(!reduced.needs_frames());
        assert_eq!(reduced.range_end, full.range_end);

        let mut scene = ScrollChoreography::new(fade_in(), reduced);
        assert!(!scene.needs_frames());
        scene.set_layout(&layout(800.0));
        assert!(scene.is_settled());

        for y in [0.0, 900.0, 1300.0, 2100.0, 1100.0] {
            scene.scroll_to(y);
            let first = scene.settle().unwrap();
            assert!(scene.is_settled());

            let mut animated = ScrollChoreography::new(fade_in(), full);
            animated.set_layout(&layout(800.0));
            animated.scroll_to(y);
            while !animated.is_settled() {
                animated.tick(FRAME);
            }
            let last = animated.settle().unwrap();
            assert_eq!(first.values, last.values);
            assert_eq!(first.pin, last.pin);
            assert_eq!(first.progress, last.progress);
        }
    }

    #[test]
    fn tick_settles_on_the_scroll_target() {
        let mut scene = ScrollChoreography::new(fade_in(), options(0.6));
        scene.set_layout(&layout(800.0));
        scene.scroll_to(2100.0);

        let mut last = None;
        while !scene.is_settled() {
            last = scene.tick(FRAME);
        }
        let last = last.unwrap();
        assert_eq!(last.progress, 1.0);
        assert_eq!(last.values[&0].get(Prop::Opacity), Some(1.0));
        assert_eq!(last.pin.offset, 1600.0);
    }
}
