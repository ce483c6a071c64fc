//! Thin wrappers over the browser APIs the motion code needs.
//!
//! Listener and frame registrations are owned guards: dropping one removes
//! the listener or cancels the pending frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, Window};

use crate::motion::{Layout, MotionPreference, PropertySet};

/// A window event listener removed on drop.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A `requestAnimationFrame` loop.
///
/// The callback receives the elapsed milliseconds since the previous frame
/// and returns whether it wants another one. A stopped loop is restarted
/// with [`FrameLoop::wake`]. Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
    last_timestamp: Rc<Cell<Option<f64>>>,
}

/// Assumed frame length for the first frame after a (re)start.
const FIRST_FRAME_MS: f64 = 1000.0 / 60.0;

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Option<Self> {
        let window = window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let last_timestamp = Rc::new(Cell::new(None));

        let closure = {
            let window = window.clone();
            let pending = pending.clone();
            let callback = Rc::downgrade(&callback);
            let last_timestamp = last_timestamp.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                let elapsed = match last_timestamp.replace(Some(timestamp)) {
                    Some(last) => (timestamp - last).max(0.0),
                    None => FIRST_FRAME_MS,
                };

                if !on_frame(elapsed) {
                    last_timestamp.set(None);
                    return;
                }

                if let Some(callback) = callback.upgrade() {
                    if let Some(cb) = callback.borrow().as_ref() {
                        pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };
        *callback.borrow_mut() = Some(closure);

        let frame_loop = Self {
            window,
            pending,
            callback,
            last_timestamp,
        };
        frame_loop.wake();
        Some(frame_loop)
    }

    /// Schedules a frame unless one is already pending.
    pub fn wake(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(cb) = self.callback.borrow().as_ref() {
            self.pending
                .set(self.window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
        self.last_timestamp.set(None);
        self.callback.borrow_mut().take();
    }
}

pub fn motion_preference() -> MotionPreference {
    let reduced = window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false);
    if reduced {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    }
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> Option<f64> {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
}

/// Document-space geometry of `trigger`. `None` while detached.
pub fn measure_layout(trigger: &Element) -> Option<Layout> {
    if !trigger.is_connected() {
        return None;
    }
    let rect = trigger.get_bounding_client_rect();
    let layout = Layout {
        trigger_top: rect.top() + scroll_y(),
        trigger_height: rect.height(),
        viewport_height: viewport_height()?,
    };
    layout.is_measured().then_some(layout)
}

pub fn element_height(element: &Element) -> Option<f64> {
    let height = element.get_bounding_client_rect().height();
    (height > 0.0).then_some(height)
}

/// Writes each animated property as an individual inline declaration.
pub fn apply_properties(element: &HtmlElement, props: &PropertySet) {
    if props.is_empty() {
        return;
    }
    let style = element.style();
    for (name, value) in props.css_declarations() {
        let _ = style.set_property(name, &value);
    }
}

pub fn set_style(element: &HtmlElement, name: &str, value: &str) {
    let _ = element.style().set_property(name, value);
}
