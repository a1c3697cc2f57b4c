//! Core data models for transform gestures.
//! Options, the transform triple, notification payloads and errors.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque pointer identifier, as delivered by `PointerEvent.pointerId`.
pub type PointerId = i32;

/// Default minimum spacing between two change notifications.
pub const DEFAULT_THROTTLE_MS: u32 = 1;
/// Upper bound accepted for the change-notification quantum.
pub const MAX_THROTTLE_MS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureOptions {
    /// Translation is always computed; a disabled flag only tells the consumer to ignore it.
    pub can_translate: bool,
    pub can_rotate: bool,
    pub can_scale: bool,
    pub throttle_ms: u32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            can_translate: true,
            can_rotate: false,
            can_scale: false,
            throttle_ms: DEFAULT_THROTTLE_MS,
        }
    }
}

impl GestureOptions {
    pub fn validate(self) -> Result<Self, GestureError> {
        if self.throttle_ms == 0 || self.throttle_ms > MAX_THROTTLE_MS {
            return Err(GestureError::InvalidThrottle(self.throttle_ms));
        }
        Ok(self)
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, GestureError> {
        let options: GestureOptions = serde_json::from_str(raw).map_err(GestureError::Options)?;
        options.validate()
    }

    pub fn to_json(&self) -> Result<String, GestureError> {
        serde_json::to_string(self).map_err(GestureError::Options)
    }
}

/// Translation, uniform scale and rotation (radians) of a manipulated object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Point,
    pub scale: f64,
    pub rotation: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Point::ZERO,
        scale: 1.0,
        rotation: 0.0,
    };

    /// Maps a point: scale, then rotate, then translate.
    pub fn apply(&self, p: Point) -> Point {
        p.scale(self.scale).rotate_clockwise(-self.rotation) + self.translation
    }

    /// The transform equivalent to applying `self` first and `next` after it.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            translation: next.apply(self.translation),
            scale: self.scale * next.scale,
            rotation: self.rotation + next.rotation,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Start,
    Change,
    End,
}

/// Payload carried by every start/change/end notification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub pointer_count: usize,
    pub translation: Point,
    pub scale: f64,
    pub rotation: f64,
    /// Current centroid, or the last known one once the set has emptied.
    pub centroid: Option<Point>,
}

impl GestureEvent {
    pub fn transform(&self) -> Transform {
        Transform {
            translation: self.translation,
            scale: self.scale,
            rotation: self.rotation,
        }
    }
}

#[derive(Debug)]
pub enum GestureError {
    DuplicatePointer(PointerId),
    InvalidThrottle(u32),
    Options(serde_json::Error),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::DuplicatePointer(id) => {
                write!(f, "transform gesture: pointer {} is already in the list", id)
            }
            GestureError::InvalidThrottle(ms) => write!(
                f,
                "transform gesture: throttle of {} ms outside 1..={} ms",
                ms, MAX_THROTTLE_MS
            ),
            GestureError::Options(err) => write!(f, "transform gesture: bad options: {}", err),
        }
    }
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GestureError::Options(err) => Some(err),
            _ => None,
        }
    }
}
