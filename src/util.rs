//! Shared geometric primitives: 2D/3D norms, outward normals, and triangle
//! area, built on `glam`'s f64 vector types.

use glam::{DVec2, DVec3};

use crate::error::CoreError;

/// A line panel in the (r, z) half-plane, or an arbitrary 3D edge used for
/// axisymmetric geometry staged as 3-vectors with the third component held
/// at zero.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub v1: DVec3,
    pub v2: DVec3,
}

impl Segment {
    pub fn new(v1: DVec3, v2: DVec3) -> Self {
        Self { v1, v2 }
    }

    pub fn length(&self) -> f64 {
        (self.v2 - self.v1).length()
    }

    /// Point at parameter `t` in `[0, 1]` along the segment.
    pub fn point_at(&self, t: f64) -> DVec3 {
        self.v1 + t * (self.v2 - self.v1)
    }
}

/// A flat triangular panel in 3D.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub v1: DVec3,
    pub v2: DVec3,
    pub v3: DVec3,
}

impl Triangle {
    pub fn new(v1: DVec3, v2: DVec3, v3: DVec3) -> Self {
        Self { v1, v2, v3 }
    }

    /// Raw (un-normalized) normal vector, `(v2-v1) x (v3-v1)`.
    fn raw_normal(&self) -> DVec3 {
        (self.v2 - self.v1).cross(self.v3 - self.v1)
    }

    pub fn area(&self) -> f64 {
        0.5 * self.raw_normal().length()
    }

    pub fn centroid(&self) -> DVec3 {
        (self.v1 + self.v2 + self.v3) / 3.0
    }

    pub fn point_at(&self, b1: f64, b2: f64) -> DVec3 {
        self.v1 + b1 * (self.v2 - self.v1) + b2 * (self.v3 - self.v1)
    }

    pub fn outward_normal(&self) -> Result<DVec3, CoreError> {
        let n = self.raw_normal();
        let len = n.length();
        if len == 0.0 {
            return Err(CoreError::DegenerateTriangle);
        }
        Ok(n / len)
    }
}

/// Outward normal of a 2D line panel, rotating the tangent by -90 degrees:
/// `(dy, -dx) / ||(dy, -dx)||`.
pub fn normal_2d(p1: DVec2, p2: DVec2) -> Result<DVec2, CoreError> {
    let tangent = p2 - p1;
    let n = DVec2::new(tangent.y, -tangent.x);
    let len = n.length();
    if len == 0.0 {
        return Err(CoreError::ZeroLengthSegment);
    }
    Ok(n / len)
}
