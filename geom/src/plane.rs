use crate::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Plane is defined by a normal vector and an offset
/// where the offset is the distance from the origin of any point on the plane projected on the normal vector.
///
/// The optional size bounds the plane for rendering and collision purposes only,
/// the plane is always treated as infinite when cutting volumes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Normal vector
    pub n: Vec3,
    /// Offset
    pub o: f32,
    /// Bounded extent
    #[serde(default)]
    pub size: Option<Vec2>,
}

/// Which half-space a point is in relative to a plane
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// n·p < o
    Negative,
    /// n·p > o
    Positive,
    /// Exactly on the plane
    On,
}

impl Plane {
    pub const X: Self = Self::new(Vec3::X, 0.0);
    pub const Y: Self = Self::new(Vec3::Y, 0.0);
    pub const Z: Self = Self::new(Vec3::Z, 0.0);

    #[inline]
    pub const fn new(n: Vec3, o: f32) -> Self {
        Self { n, o, size: None }
    }

    #[inline]
    pub const fn with_size(n: Vec3, size: Vec2, o: f32) -> Self {
        Self {
            n,
            o,
            size: Some(size),
        }
    }

    /// Signed distance from the plane, positive on the side the normal points to.
    #[inline]
    pub fn distance(&self, p: Vec3) -> f32 {
        self.n.dot(p) - self.o
    }

    pub fn side(&self, p: Vec3) -> PlaneSide {
        let d = self.distance(p);
        if d < 0.0 {
            PlaneSide::Negative
        } else if d > 0.0 {
            PlaneSide::Positive
        } else {
            PlaneSide::On
        }
    }

    pub fn point_is_positive(&self, p: Vec3) -> bool {
        self.distance(p) >= 0.0
    }

    /// Negates the normal and keeps the offset value.
    /// The region below the flipped plane is the mirror image of the region below self.
    #[inline]
    pub fn flipped(self) -> Self {
        Self { n: -self.n, ..self }
    }

    pub fn from_points(p0: Vec3, p1: Vec3, p2: Vec3) -> Option<Self> {
        let n = (p1 - p0).cross(p2 - p0).try_normalize()?;
        let o = n.dot(p0);
        Some(Self::new(n, o))
    }
}
