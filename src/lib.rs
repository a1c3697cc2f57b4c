//! Multi-pointer transform gesture recognition.
//!
//! Feed pointer lifecycle events into a [`TransformGesture`] and receive
//! start/change/end notifications carrying a translation, scale and rotation
//! that compose smoothly as contacts come and go.

pub mod geometry;
pub mod gesture;
pub mod model;
pub mod sink;
pub mod state;
pub mod timer;
pub mod util;
pub mod web;

pub use geometry::Point;
pub use gesture::{GestureConfig, TransformGesture};
pub use model::{GestureError, GestureEvent, GestureOptions, GesturePhase, PointerId, Transform};
pub use sink::{FnSink, GestureSink};
pub use timer::{ChangeTimer, ManualTimer};
