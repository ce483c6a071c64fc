//! Mounts a [`ScrollChoreography`] onto live elements.
//!
//! A mounted scene listens to scroll, resize and load on the window, scrubs
//! its timeline from a frame loop, and writes resolved values to the
//! elements registered under each ordinal. Under reduced motion there is no
//! frame loop and every event settles synchronously. Dropping the
//! [`ScrollScene`] releases all of it.
//!
//! The pinned element itself is held by `position: sticky` in the section
//! styles; only its `data-pinned` flag is written from here.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, error, warn};
use web_sys::{Element, HtmlElement};
use yew::NodeRef;

use crate::dom::{self, FrameLoop, WindowListener};
use crate::motion::pin::{PinState, PinTransition};
use crate::motion::{Layout, SceneFrame, SceneOptions, ScrollChoreography, TargetRegistry, Timeline, TimelineError};

/// Resize bursts are collapsed into one re-measure after this quiet period.
const RESIZE_DEBOUNCE_MS: u32 = 150;

pub type TimelineBuilder = Box<dyn Fn(&Layout, &TargetRegistry<NodeRef>) -> Result<Timeline, TimelineError>>;

pub struct SceneConfig {
    pub name: &'static str,
    pub options: SceneOptions,
    /// Element whose box defines the scroll range.
    pub trigger: NodeRef,
    /// Element held in the viewport while the range is active.
    pub pin: NodeRef,
    pub targets: TargetRegistry<NodeRef>,
    /// Rebuilds the timeline for fresh geometry.
    pub build: TimelineBuilder,
}

struct SceneState {
    name: &'static str,
    engine: ScrollChoreography,
    trigger: NodeRef,
    pin: NodeRef,
    targets: TargetRegistry<NodeRef>,
    build: TimelineBuilder,
}

impl SceneState {
    /// Re-measures, rebuilds the timeline and retargets. No-op while the
    /// trigger is detached.
    fn refresh(&mut self) {
        let Some(layout) = self.trigger.cast::<Element>().and_then(|el| dom::measure_layout(&el)) else {
            debug!("{}: layout not available yet", self.name);
            return;
        };

        let timeline = match (self.build)(&layout, &self.targets) {
            Ok(timeline) => timeline,
            Err(e) => {
                error!("{}: invalid timeline, rendering static content: {}", self.name, e);
                Timeline::new()
            }
        };
        if timeline.is_empty() {
            debug!("{}: nothing to animate", self.name);
        }
        self.engine.set_timeline(timeline);

        if let Some(range) = self.engine.set_layout(&layout) {
            debug!(
                "{}: scroll range {:.0}..{:.0}px, timeline {:.2}",
                self.name,
                range.start(),
                range.end(),
                self.engine.timeline().duration()
            );
        }
        self.scroll_to(dom::scroll_y());
    }

    fn scroll_to(&mut self, scroll_y: f64) {
        if let Some((pin, transition)) = self.engine.scroll_to(scroll_y) {
            self.apply_pin(pin, transition);
        }
    }

    /// Applies the current scroll target at once.
    fn settle(&mut self) {
        if let Some(frame) = self.engine.settle() {
            self.apply(&frame);
        }
    }

    fn apply(&self, frame: &SceneFrame) {
        for (target, node) in self.targets.iter() {
            let Some(props) = frame.values.get(&target) else {
                continue;
            };
            if let Some(element) = node.cast::<HtmlElement>() {
                dom::apply_properties(&element, props);
            }
        }
        if let Some(pin) = self.pin.cast::<HtmlElement>() {
            dom::set_style(&pin, "--scene-progress", &format!("{:.4}", frame.progress));
        }
        self.apply_pin(frame.pin, frame.transition);
    }

    fn apply_pin(&self, pin: PinState, transition: Option<PinTransition>) {
        if let Some(element) = self.pin.cast::<Element>() {
            let _ = element.set_attribute("data-pinned", if pin.engaged { "true" } else { "false" });
        }
        if let Some(t) = transition {
            debug!("{}: {:?} -> {:?} at {:.0}px", self.name, t.from, t.to, pin.offset);
        }
    }
}

/// A live scroll choreography. Drop to tear it down.
pub struct ScrollScene {
    _scroll: Option<WindowListener>,
    _resize: Option<WindowListener>,
    _load: Option<WindowListener>,
    debounce: Rc<RefCell<Option<Timeout>>>,
    _frames: Option<Rc<FrameLoop>>,
    state: Rc<RefCell<SceneState>>,
}

impl ScrollScene {
    pub fn mount(config: SceneConfig) -> Self {
        let SceneConfig {
            name,
            options,
            trigger,
            pin,
            targets,
            build,
        } = config;

        if targets.is_empty() {
            warn!("{}: mounted without targets", name);
        }
        let target_count = targets.len();
        let options = options.for_motion(dom::motion_preference());

        let state = Rc::new(RefCell::new(SceneState {
            name,
            engine: ScrollChoreography::new(Timeline::new(), options),
            trigger,
            pin,
            targets,
            build,
        }));

        {
            let mut scene = state.borrow_mut();
            scene.refresh();
            scene.settle();
        }

        let frames = if options.needs_frames() {
            let state = state.clone();
            FrameLoop::new(move |elapsed_ms| {
                let mut scene = state.borrow_mut();
                match scene.engine.tick(elapsed_ms / 1000.0) {
                    Some(frame) => {
                        scene.apply(&frame);
                        !scene.engine.is_settled()
                    }
                    None => false,
                }
            })
            .map(Rc::new)
        } else {
            debug!("{}: reduced motion, applying scroll directly", name);
            None
        };

        let scroll = {
            let state = state.clone();
            let frames = frames.clone();
            WindowListener::new("scroll", move || {
                let mut scene = state.borrow_mut();
                scene.scroll_to(dom::scroll_y());
                match &frames {
                    Some(frames) => frames.wake(),
                    None => scene.settle(),
                }
            })
        };

        let debounce = Rc::new(RefCell::new(None::<Timeout>));
        let resize = {
            let state = state.clone();
            let frames = frames.clone();
            let debounce = debounce.clone();
            WindowListener::new("resize", move || {
                let state = state.clone();
                let frames = frames.clone();
                // replacing the pending timeout cancels it
                *debounce.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    refresh_and_wake(&state, frames.as_deref());
                }));
            })
        };

        // late images and fonts shift everything below them
        let load = {
            let state = state.clone();
            let frames = frames.clone();
            WindowListener::new("load", move || refresh_and_wake(&state, frames.as_deref()))
        };

        debug!("{}: mounted with {} targets", name, target_count);

        Self {
            _scroll: scroll,
            _resize: resize,
            _load: load,
            debounce,
            _frames: frames,
            state,
        }
    }
}

fn refresh_and_wake(state: &Rc<RefCell<SceneState>>, frames: Option<&FrameLoop>) {
    let mut scene = state.borrow_mut();
    scene.refresh();
    match frames {
        Some(frames) => frames.wake(),
        None => scene.settle(),
    }
}

impl Drop for ScrollScene {
    fn drop(&mut self) {
        self.debounce.borrow_mut().take();
        if let Ok(mut scene) = self.state.try_borrow_mut() {
            debug!("{}: unmounted", scene.name);
            scene.targets.clear();
        }
    }
}
