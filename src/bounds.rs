//! Axis-aligned bounding box folded over every vertex of a model.

use cgmath::Vector3;

/// Axis-aligned bounding box.
///
/// Starts in the empty state (+INF min, −INF max) and grows monotonically
/// through [`extend`](Aabb::extend); it never shrinks. Once a load call
/// returns, the box is read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    /// The empty box: any `extend` establishes both corners at once.
    pub fn empty() -> Self {
        Aabb {
            min: Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// True until the first point is folded in.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Grows the box to contain `point` (componentwise min/max).
    pub fn extend(&mut self, point: Vector3<f32>) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }
}
