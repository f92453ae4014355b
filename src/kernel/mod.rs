//! Point-source kernels: the ring potential (axisymmetric) and the 3D
//! point-charge potential, each with its gradient.
//!
//! Dispatch is expressed as a small capability trait rather than function
//! pointers or boxed closures, so callers select a kernel at compile time
//! the way the crate's other trait-dispatched seams (matrix assembly's
//! excitation kinds) are selected.

mod point3d;
mod ring;

pub use point3d::Point3dKernel;
pub use ring::RingKernel;

use crate::error::CoreError;
use glam::DVec3;

/// A source-target potential kernel and its gradient with respect to the
/// target coordinates.
pub trait Kernel {
    /// Coordinates of a source point as seen by this kernel (r0, z0) for
    /// the ring kernel, (x0, y0, z0) for the 3D point kernel.
    type Point;

    fn potential(&self, source: Self::Point, target: Self::Point) -> Result<f64, CoreError>;

    /// Gradient of the potential with respect to the target coordinates.
    fn gradient(&self, source: Self::Point, target: Self::Point) -> Result<DVec3, CoreError>;

    /// `-gradient . normal`, the outward field component used by
    /// dielectric-interface matrix rows.
    fn field_dot_normal(
        &self,
        source: Self::Point,
        target: Self::Point,
        normal: DVec3,
    ) -> Result<f64, CoreError> {
        Ok(-self.gradient(source, target)?.dot(normal))
    }
}
