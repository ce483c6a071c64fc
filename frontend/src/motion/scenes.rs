//! Timelines for the two scroll-pinned sections of the landing page.
//!
//! Targets are addressed by ordinal; each section registers its elements
//! under the same ordinals it passes here.

use super::choreography::SceneOptions;
use super::easing::Ease;
use super::props::{Prop, PropertySet};
use super::scroll_range::RangeEnd;
use super::timeline::{Timeline, TimelineError};

pub mod methodology {
    use super::*;

    pub const TITLE: usize = 0;
    pub const LINE: usize = 1;
    const FIRST_CARD: usize = 2;

    /// Card offset before the first card has been measured.
    pub const DEFAULT_CARD_OFFSET: f64 = 260.0;
    /// Gap kept between a card and the one sliding past it.
    pub const CARD_GAP: f64 = 56.0;
    pub const MIN_LINE_INSET: f64 = 24.0;

    pub fn card(index: usize) -> usize {
        FIRST_CARD + index
    }

    pub fn options(steps: usize) -> SceneOptions {
        SceneOptions {
            range_end: RangeEnd::ViewportMultiples(steps.saturating_sub(1) as f64),
            scrub: 0.6,
            anticipate_px: 0.0,
        }
    }

    /// One viewport per step; the sticky pin travels through all but the last.
    pub fn section_height_vh(steps: usize) -> f64 {
        steps.max(1) as f64 * 100.0
    }

    pub fn card_offset(card_height: f64) -> f64 {
        card_height + CARD_GAP
    }

    /// Bottom inset of the progress line so it stops level with the cards.
    pub fn line_inset(viewport_height: f64, card_height: f64) -> f64 {
        ((viewport_height - card_height) / 2.0).max(MIN_LINE_INSET)
    }

    /// One segment per step transition; every segment resolves inside its
    /// own unit of timeline so segment `i` ends exactly at `i + 1`.
    pub fn timeline(steps: usize, card_offset: f64) -> Result<Timeline, TimelineError> {
        let mut tl = Timeline::new();
        if steps == 0 {
            return Ok(tl);
        }

        let hidden_below = PropertySet::new()
            .with(Prop::Opacity, 0.0)
            .with(Prop::Y, card_offset);
        let shown = PropertySet::new().with(Prop::Opacity, 1.0).with(Prop::Y, 0.0);

        tl.set(TITLE, PropertySet::new().with(Prop::Opacity, 1.0).with(Prop::Y, 0.0));
        tl.set(LINE, PropertySet::new().with(Prop::ScaleY, 0.0));
        tl.set(card(0), shown.clone());
        for i in 1..steps {
            tl.set(card(i), hidden_below.clone());
        }

        let segments = steps.saturating_sub(1).max(1);
        for i in 0..steps.saturating_sub(1) {
            let pos = i as f64;

            tl.to(
                LINE,
                PropertySet::new().with(Prop::ScaleY, (i + 1) as f64 / segments as f64),
                pos,
                1.0,
                Ease::None,
            )?;

            if i == 0 {
                tl.to(
                    TITLE,
                    PropertySet::new().with(Prop::Opacity, 0.0).with(Prop::Y, -20.0),
                    0.15,
                    0.25,
                    Ease::Power2Out,
                )?;
            }

            tl.to(
                card(i),
                PropertySet::new()
                    .with(Prop::Opacity, 0.0)
                    .with(Prop::Y, -card_offset),
                pos + 0.2,
                0.5,
                Ease::Power2InOut,
            )?;

            tl.from_to(card(i + 1), hidden_below.clone(), shown.clone(), pos + 0.5, 0.5, Ease::Power2Out)?;
        }

        tl.pad_to(segments as f64);
        Ok(tl)
    }
}

pub mod deliverables {
    use super::*;

    pub const CTA: usize = 0;
    const FIRST_ITEM: usize = 1;

    pub fn item(index: usize) -> usize {
        FIRST_ITEM + index
    }

    pub fn options() -> SceneOptions {
        SceneOptions {
            range_end: RangeEnd::TriggerBottom,
            scrub: 0.7,
            anticipate_px: 1.0,
        }
    }

    /// Section height in viewport units; each extra item buys 45vh of scroll.
    pub fn section_height_vh(items: usize) -> f64 {
        100.0 + items.saturating_sub(1) as f64 * 45.0
    }

    pub fn timeline(items: usize, has_cta: bool) -> Result<Timeline, TimelineError> {
        let mut tl = Timeline::new();

        let tucked = PropertySet::new()
            .with(Prop::Opacity, 0.0)
            .with(Prop::Y, -160.0)
            .with(Prop::Rotation, -10.0)
            .with(Prop::RotationX, 18.0)
            .with(Prop::Scale, 0.96)
            .with(Prop::Blur, 6.0);
        let landed = PropertySet::new()
            .with(Prop::Opacity, 1.0)
            .with(Prop::Y, 0.0)
            .with(Prop::Rotation, 0.0)
            .with(Prop::RotationX, 0.0)
            .with(Prop::Scale, 1.0)
            .with(Prop::Blur, 0.0);

        for i in 0..items {
            tl.set(item(i), tucked.clone());
        }
        if has_cta {
            tl.set(CTA, PropertySet::new().with(Prop::Opacity, 0.0).with(Prop::Y, 20.0));
        }

        for i in 0..items {
            tl.to(item(i), landed.clone(), i as f64 + 0.1, 0.75, Ease::BackOut(1.2))?;
        }

        if has_cta {
            tl.to(
                CTA,
                PropertySet::new().with(Prop::Opacity, 1.0).with(Prop::Y, 0.0),
                items as f64 + 0.2,
                0.4,
                Ease::Power2Out,
            )?;
        }

        Ok(tl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::props::Frame;
    use crate::motion::scroll_range::{Layout, ScrollRange};

    fn get(frame: &Frame, target: usize, prop: Prop) -> f64 {
        frame[&target].get(prop).unwrap()
    }

    fn visible(frame: &Frame, target: usize) -> bool {
        get(frame, target, Prop::Opacity) > 0.0
    }

    #[test]
    fn methodology_midpoint_shows_second_step_only() {
        let offset = 300.0;
        let tl = methodology::timeline(3, offset).unwrap();
        assert_eq!(tl.duration(), 2.0);

        let mid = tl.resolve(0.5);
        let (c0, c1, c2) = (methodology::card(0), methodology::card(1), methodology::card(2));

        assert_eq!(get(&mid, c1, Prop::Opacity), 1.0);
        assert_eq!(get(&mid, c1, Prop::Y), 0.0);
        assert_eq!(get(&mid, c0, Prop::Opacity), 0.0);
        assert_eq!(get(&mid, c0, Prop::Y), -offset);
        assert!(!visible(&mid, c2));
        assert_eq!(get(&mid, c2, Prop::Y), offset);
        assert!((get(&mid, methodology::LINE, Prop::ScaleY) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn methodology_cards_cross_fade_inside_each_segment() {
        let tl = methodology::timeline(3, 260.0).unwrap();
        let frame = tl.resolve_at(0.6);
        assert!(visible(&frame, methodology::card(0)));
        assert!(visible(&frame, methodology::card(1)));
    }

    #[test]
    fn methodology_title_fades_once_and_stays_hidden() {
        let tl = methodology::timeline(3, 260.0).unwrap();
        assert_eq!(get(&tl.resolve(0.0), methodology::TITLE, Prop::Opacity), 1.0);
        for p in [0.25, 0.5, 0.75, 1.0] {
            assert_eq!(get(&tl.resolve(p), methodology::TITLE, Prop::Opacity), 0.0);
        }
    }

    #[test]
    fn methodology_end_state_shows_last_step_with_full_line() {
        let tl = methodology::timeline(3, 260.0).unwrap();
        let end = tl.resolve(1.0);
        assert_eq!(get(&end, methodology::card(2), Prop::Opacity), 1.0);
        assert_eq!(get(&end, methodology::LINE, Prop::ScaleY), 1.0);
    }

    #[test]
    fn methodology_single_step_has_nothing_to_animate() {
        let tl = methodology::timeline(1, 260.0).unwrap();
        assert!(tl.is_empty());
        assert_eq!(get(&tl.resolve(1.0), methodology::card(0), Prop::Opacity), 1.0);
        assert!(methodology::timeline(0, 260.0).unwrap().is_empty());
    }

    #[test]
    fn line_inset_never_drops_below_minimum() {
        assert_eq!(methodology::line_inset(900.0, 300.0), 300.0);
        assert_eq!(methodology::line_inset(300.0, 400.0), methodology::MIN_LINE_INSET);
    }

    #[test]
    fn deliverables_start_hidden_and_end_fully_revealed() {
        let tl = deliverables::timeline(6, true).unwrap();

        let start = tl.resolve(0.0);
        assert!((0..6).all(|i| !visible(&start, deliverables::item(i))));
        assert!(!visible(&start, deliverables::CTA));

        let end = tl.resolve(1.0);
        for i in 0..6 {
            let item = deliverables::item(i);
            assert_eq!(get(&end, item, Prop::Opacity), 1.0);
            assert_eq!(get(&end, item, Prop::Blur), 0.0);
            assert!((get(&end, item, Prop::Scale) - 1.0).abs() < 1e-9);
        }
        assert_eq!(get(&end, deliverables::CTA, Prop::Opacity), 1.0);
    }

    #[test]
    fn deliverables_reveal_in_order() {
        let tl = deliverables::timeline(6, true).unwrap();
        let frame = tl.resolve_at(2.5);
        assert!((0..3).all(|i| visible(&frame, deliverables::item(i))));
        assert!((3..6).all(|i| !visible(&frame, deliverables::item(i))));
        assert!(!visible(&frame, deliverables::CTA));
    }

    #[test]
    fn deliverables_without_cta_leave_it_untouched() {
        let tl = deliverables::timeline(2, false).unwrap();
        assert!(!tl.resolve(1.0).contains_key(&deliverables::CTA));
    }

    #[test]
    fn deliverables_section_grows_with_item_count() {
        assert_eq!(deliverables::section_height_vh(6), 325.0);
        assert_eq!(deliverables::section_height_vh(0), 100.0);
    }

    /// Distance a `position: sticky; top: 0` child of viewport height stays
    /// pinned inside a section of the given height.
    fn sticky_travel(layout: &Layout) -> f64 {
        layout.trigger_height - layout.viewport_height
    }

    fn section_layout(height_vh: f64, viewport_height: f64) -> Layout {
        Layout {
            trigger_top: 1200.0,
            trigger_height: height_vh / 100.0 * viewport_height,
            viewport_height,
        }
    }

    #[test]
    fn sticky_pin_spans_the_scroll_range() {
        for viewport_height in [640.0, 900.0] {
            for steps in 2..=4 {
                let layout = section_layout(methodology::section_height_vh(steps), viewport_height);
                let range = ScrollRange::from_layout(&layout, methodology::options(steps).range_end).unwrap();
                assert!((range.span() - sticky_travel(&layout)).abs() < 1e-9);
                assert_eq!(range.start(), layout.trigger_top);
            }
            for items in 2..=6 {
                let layout = section_layout(deliverables::section_height_vh(items), viewport_height);
                let range = ScrollRange::from_layout(&layout, deliverables::options().range_end).unwrap();
                assert!((range.span() - sticky_travel(&layout)).abs() < 1e-9);
                assert_eq!(range.start(), layout.trigger_top);
            }
        }
    }
}
