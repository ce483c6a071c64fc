//! Scroll choreography and free-running motion, independent of the DOM.
//!
//! Everything here is plain data and arithmetic; `crate::scene` and the
//! section components feed it measurements and write its output to elements.

pub mod choreography;
pub mod easing;
pub mod marquee;
pub mod parallax;
pub mod pin;
pub mod props;
pub mod registry;
pub mod scenes;
pub mod scroll_range;
pub mod scrub;
pub mod timeline;

pub use choreography::{SceneFrame, SceneOptions, ScrollChoreography};
pub use marquee::{Marquee, MotionPreference};
pub use parallax::Parallax;
pub use props::PropertySet;
pub use registry::TargetRegistry;
pub use scroll_range::Layout;
pub use timeline::{Timeline, TimelineError};
