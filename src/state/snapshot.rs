//! Reference snapshot captured at every membership change.
//!
//! Later motion is measured against it: the centroid anchors translation,
//! the summed spread is the scale proxy and the far pair's axis is the
//! rotation proxy.

use super::pointers::PointerSet;
use crate::geometry::Point;
use crate::model::PointerId;

/// The two contacts whose connecting line defines the rotation axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FarPair {
    pub id_a: PointerId,
    pub id_b: PointerId,
    pub distance: f64,
    /// `atan2` of `position(id_a) - position(id_b)`.
    pub angle: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReferenceSnapshot {
    pub centroid: Option<Point>,
    pub sum_of_distances: Option<f64>,
    pub far_pair: Option<FarPair>,
}

impl ReferenceSnapshot {
    pub fn capture(pointers: &PointerSet) -> Self {
        let centroid = centroid(pointers);
        Self {
            centroid,
            sum_of_distances: centroid.map(|c| sum_of_distances(pointers, c)),
            far_pair: far_pair(pointers),
        }
    }
}

pub fn centroid(pointers: &PointerSet) -> Option<Point> {
    if pointers.is_empty() {
        return None;
    }
    let sum = pointers.iter().fold(Point::ZERO, |acc, c| acc + c.position);
    Some(sum.scale(1.0 / pointers.len() as f64))
}

pub fn sum_of_distances(pointers: &PointerSet, center: Point) -> f64 {
    pointers.iter().map(|c| c.position.distance(center)).sum()
}

/// Farthest pair over ascending ids; on ties the lower-ordered pair is kept.
pub fn far_pair(pointers: &PointerSet) -> Option<FarPair> {
    let mut ordered: Vec<(PointerId, Point)> = pointers.iter().map(|c| (c.id, c.position)).collect();
    ordered.sort_by_key(|(id, _)| *id);

    let mut best: Option<FarPair> = None;
    for (i, &(id_a, pa)) in ordered.iter().enumerate() {
        for &(id_b, pb) in &ordered[i + 1..] {
            let distance = pa.distance(pb);
            if best.is_none_or(|b| distance > b.distance) {
                best = Some(FarPair {
                    id_a,
                    id_b,
                    distance,
                    angle: (pa - pb).angle(),
                });
            }
        }
    }
    best
}
