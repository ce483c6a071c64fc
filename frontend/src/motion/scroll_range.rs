/// Where a scroll range ends, relative to its trigger element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RangeEnd {
    /// `count` viewport heights past the start.
    ViewportMultiples(f64),
    /// When the trigger's bottom edge reaches the viewport's bottom edge.
    TriggerBottom,
}

/// Measured geometry of a trigger element, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Distance from the top of the document to the trigger's top edge.
    pub trigger_top: f64,
    pub trigger_height: f64,
    pub viewport_height: f64,
}

impl Layout {
    /// Layouts from detached or collapsed elements are unusable.
    pub fn is_measured(&self) -> bool {
        self.trigger_top.is_finite()
            && self.trigger_height.is_finite()
            && self.viewport_height.is_finite()
            && self.viewport_height > 0.0
    }
}

/// Where in a range a scroll offset falls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Before,
    In,
    After,
}

/// Scroll positions over which a choreography is active. `end > start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollRange {
    start: f64,
    end: f64,
}

impl ScrollRange {
    pub fn new(start: f64, end: f64) -> Self {
        let end = if end > start { end } else { start + 1.0 };
        Self { start, end }
    }

    /// Range starting when the trigger's top reaches the viewport's top.
    /// Returns `None` until the layout has been measured.
    pub fn from_layout(layout: &Layout, end: RangeEnd) -> Option<Self> {
        if !layout.is_measured() {
            return None;
        }
        let start = layout.trigger_top;
        let end = match end {
            RangeEnd::ViewportMultiples(count) => start + layout.viewport_height * count.max(0.0),
            RangeEnd::TriggerBottom => {
                layout.trigger_top + layout.trigger_height - layout.viewport_height
            }
        };
        Some(Self::new(start, end))
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Normalised progress of `scroll_y` through the range, clamped to `[0, 1]`.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        ((scroll_y - self.start) / self.span()).clamp(0.0, 1.0)
    }

    pub fn phase(&self, scroll_y: f64) -> Phase {
        if scroll_y < self.start {
            Phase::Before
        } else if scroll_y >= self.end {
            Phase::After
        } else {
            Phase::In
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            trigger_top: 1000.0,
            trigger_height: 3000.0,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn multi_step_range_extends_one_viewport_per_remaining_step() {
        let range = ScrollRange::from_layout(&layout(), RangeEnd::ViewportMultiples(2.0)).unwrap();
        assert_eq!(range.start(), 1000.0);
        assert_eq!(range.end(), 2600.0);
    }

    #[test]
    fn trigger_bottom_range_ends_at_bottom_of_viewport() {
        let range = ScrollRange::from_layout(&layout(), RangeEnd::TriggerBottom).unwrap();
        assert_eq!(range.end(), 3200.0);
    }

    #[test]
    fn degenerate_range_keeps_end_after_start() {
        let short = Layout {
            trigger_height: 500.0,
            ..layout()
        };
        let range = ScrollRange::from_layout(&short, RangeEnd::TriggerBottom).unwrap();
        assert!(range.end() > range.start());
        assert_eq!(range.progress(range.start()), 0.0);
    }

    #[test]
    fn unmeasured_layout_yields_no_range() {
        let detached = Layout {
            viewport_height: 0.0,
            ..layout()
        };
        assert!(ScrollRange::from_layout(&detached, RangeEnd::TriggerBottom).is_none());
    }

    #[test]
    fn progress_is_clamped_and_phases_follow_boundaries() {
        let range = ScrollRange::new(100.0, 300.0);
        assert_eq!(range.progress(0.0), 0.0);
        assert_eq!(range.progress(200.0), 0.5);
        assert_eq!(range.progress(10_000.0), 1.0);
        assert_eq!(range.phase(99.0), Phase::Before);
        assert_eq!(range.phase(100.0), Phase::In);
        assert_eq!(range.phase(300.0), Phase::After);
    }
}
