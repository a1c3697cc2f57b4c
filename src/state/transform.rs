//! Base transform plus interim motion measured against the reference snapshot.
//!
//! The base only changes in [`TransformState::commit`], which runs right
//! before a membership change; [`TransformState::recapture`] runs right after.
//! Between membership changes the observable transform is the base composed
//! with the interim scale ratio and rotation delta, anchored at the live
//! centroid.

use std::cell::Cell;

use super::pointers::PointerSet;
use super::snapshot::{self, ReferenceSnapshot};
use crate::geometry::{Point, normalize_angle};
use crate::model::{GestureOptions, Transform};

/// Snapshot spreads at or below this are treated as coincident contacts.
const DEGENERATE_SPREAD: f64 = 1e-9;

#[derive(Debug)]
pub struct TransformState {
    can_rotate: bool,
    can_scale: bool,
    base: Transform,
    snapshot: ReferenceSnapshot,
    // Rotation delta held when a far-pair id goes missing.
    last_rotation_delta: Cell<f64>,
}

impl TransformState {
    pub fn new(options: &GestureOptions) -> Self {
        Self {
            can_rotate: options.can_rotate,
            can_scale: options.can_scale,
            base: Transform::IDENTITY,
            snapshot: ReferenceSnapshot::default(),
            last_rotation_delta: Cell::new(0.0),
        }
    }

    pub fn base(&self) -> &Transform {
        &self.base
    }

    pub fn snapshot(&self) -> &ReferenceSnapshot {
        &self.snapshot
    }

    /// Back to identity, used when a new contact session begins.
    pub fn reset(&mut self) {
        self.base = Transform::IDENTITY;
        self.last_rotation_delta.set(0.0);
    }

    /// Ratio of the current spread to the snapshot spread.
    ///
    /// Neutral with fewer than two contacts, with scaling disabled, or when the
    /// snapshot spread is degenerate (all contacts captured at one point).
    pub fn interim_scale_ratio(&self, pointers: &PointerSet) -> f64 {
        if !self.can_scale || pointers.len() < 2 {
            return 1.0;
        }
        let Some(reference) = self.snapshot.sum_of_distances else {
            return 1.0;
        };
        if reference <= DEGENERATE_SPREAD {
            return 1.0;
        }
        let Some(center) = snapshot::centroid(pointers) else {
            return 1.0;
        };
        let ratio = snapshot::sum_of_distances(pointers, center) / reference;
        if ratio.is_finite() { ratio } else { 1.0 }
    }

    /// Angle the far-pair axis turned since the snapshot, in `(-PI, PI]`.
    ///
    /// Always measured on the snapshot's two ids, never on a freshly found
    /// farthest pair. If either id is gone the last computed delta is held.
    pub fn interim_rotation_delta(&self, pointers: &PointerSet) -> f64 {
        if !self.can_rotate || pointers.len() < 2 {
            return 0.0;
        }
        let Some(pair) = self.snapshot.far_pair else {
            return 0.0;
        };
        match (pointers.position(pair.id_a), pointers.position(pair.id_b)) {
            (Some(a), Some(b)) => {
                let delta = normalize_angle((a - b).angle() - pair.angle);
                self.last_rotation_delta.set(delta);
                delta
            }
            _ => self.last_rotation_delta.get(),
        }
    }

    pub fn translation(&self, pointers: &PointerSet) -> Point {
        match (snapshot::centroid(pointers), self.snapshot.centroid) {
            (Some(center), Some(reference)) => {
                let offset = (self.base.translation - reference)
                    .scale(self.interim_scale_ratio(pointers))
                    .rotate_clockwise(-self.interim_rotation_delta(pointers));
                center + offset
            }
            _ => self.base.translation,
        }
    }

    pub fn scale(&self, pointers: &PointerSet) -> f64 {
        self.base.scale * self.interim_scale_ratio(pointers)
    }

    pub fn rotation(&self, pointers: &PointerSet) -> f64 {
        self.base.rotation + self.interim_rotation_delta(pointers)
    }

    pub fn current(&self, pointers: &PointerSet) -> Transform {
        Transform {
            translation: self.translation(pointers),
            scale: self.scale(pointers),
            rotation: self.rotation(pointers),
        }
    }

    /// Freezes the interim contribution into the base. Call before a membership change.
    pub fn commit(&mut self, pointers: &PointerSet) {
        self.base = self.current(pointers);
    }

    /// Measures from the post-change set from now on. Call after a membership change.
    pub fn recapture(&mut self, pointers: &PointerSet) {
        self.snapshot = ReferenceSnapshot::capture(pointers);
        self.last_rotation_delta.set(0.0);
    }
}
