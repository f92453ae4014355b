//! The 3D point-charge kernel, `Phi = 1/(4r)`.

use glam::DVec3;

use crate::error::CoreError;

use super::Kernel;

pub struct Point3dKernel;

impl Kernel for Point3dKernel {
    type Point = DVec3;

    fn potential(&self, source: DVec3, target: DVec3) -> Result<f64, CoreError> {
        let r = (target - source).length();
        Ok(1.0 / (4.0 * r))
    }

    fn gradient(&self, source: DVec3, target: DVec3) -> Result<DVec3, CoreError> {
        let d = source - target;
        let r = d.length();
        Ok(d / (4.0 * r.powi(3)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn potential_decays_as_one_over_r() {
        let kernel = Point3dKernel;
        let source = DVec3::ZERO;
        let target = DVec3::new(2.0, 0.0, 0.0);
        assert_relative_eq!(kernel.potential(source, target).unwrap(), 1.0 / 8.0, epsilon = 1e-12);
    }
}
