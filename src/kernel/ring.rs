//! The ring-charge kernel: the potential, at an axisymmetric target point,
//! of a uniform unit-charge ring of radius `r` sitting at height `z`.

use glam::{DVec2, DVec3};

use crate::constants::EPS_AXIS;
use crate::elliptic::{ellipe, ellipk};
use crate::error::CoreError;

use super::Kernel;

/// Potential of a charged ring, axisymmetric in (r, z).
pub struct RingKernel;

fn elliptic_parameter(r0: f64, z0: f64, r: f64, z: f64) -> (f64, f64) {
    let rz2 = (r + r0).powi(2) + (z - z0).powi(2);
    (4.0 * r * r0 / rz2, rz2)
}

fn potential_radial_ring(r0: f64, z0: f64, r: f64, z: f64) -> Result<f64, CoreError> {
    let (t, rz2) = elliptic_parameter(r0, z0, r, z);
    Ok(ellipk(t)? * r / rz2.sqrt())
}

/// dPhi/dr0. Short-circuits to zero within [`EPS_AXIS`] of the axis, to
/// avoid stepping into the kernel's singularity there.
fn dr1_potential_radial_ring(r0: f64, z0: f64, r: f64, z: f64) -> Result<f64, CoreError> {
    if r0.abs() < EPS_AXIS {
        return Ok(0.0);
    }
    let s = ((z - z0).powi(2) + (r + r0).powi(2)).sqrt();
    let s1 = (r0 + r) / s;
    let t = 4.0 * r * r0 / s.powi(2);
    let a = ellipe(t)?;
    let b = ellipk(t)?;
    let ellipe_term = -(2.0 * r * r0 * s1 - r * s) / (2.0 * r0 * s.powi(2) - 8.0 * r0.powi(2) * r);
    let ellipk_term = -r / (2.0 * r0 * s);
    Ok(a * ellipe_term + b * ellipk_term)
}

fn dz1_potential_radial_ring(r0: f64, z0: f64, r: f64, z: f64) -> Result<f64, CoreError> {
    let (t, rz2) = elliptic_parameter(r0, z0, r, z);
    let numerator = r * (z - z0) * ellipe(t)?;
    let denominator = ((z - z0).powi(2) + (r - r0).powi(2)) * rz2.sqrt();
    Ok(numerator / denominator)
}

impl Kernel for RingKernel {
    type Point = DVec2;

    /// `source` is the ring's (r, z); `target` is the observation point's
    /// (r0, z0).
    fn potential(&self, source: DVec2, target: DVec2) -> Result<f64, CoreError> {
        potential_radial_ring(target.x, target.y, source.x, source.y)
    }

    fn gradient(&self, source: DVec2, target: DVec2) -> Result<DVec3, CoreError> {
        let dr = dr1_potential_radial_ring(target.x, target.y, source.x, source.y)?;
        let dz = dz1_potential_radial_ring(target.x, target.y, source.x, source.y)?;
        Ok(DVec3::new(dr, dz, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ring_on_axis_matches_closed_form() {
        // A unit ring of radius 1 at z=0, evaluated on-axis at (0, 2):
        // Phi = pi/2 * 1/sqrt(1^2 + 2^2) = pi/(2 sqrt(5)).
        let kernel = RingKernel;
        let source = DVec2::new(1.0, 0.0);
        let target = DVec2::new(0.0, 2.0);
        let phi = kernel.potential(source, target).unwrap();
        assert_relative_eq!(phi, std::f64::consts::FRAC_PI_2 / 5f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn gradient_near_axis_short_circuits_r_component() {
        let kernel = RingKernel;
        let source = DVec2::new(1.0, 0.0);
        let target = DVec2::new(0.0, 2.0);
        let grad = kernel.gradient(source, target).unwrap();
        assert_eq!(grad.x, 0.0);
    }
}
