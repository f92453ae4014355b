//! Axisymmetric potential and field evaluation, direct and
//! expansion-based.

use glam::{DVec2, DVec3};

use crate::constants::{DERIV_MAX, N_QUAD_2D};
use crate::error::CoreError;
use crate::kernel::{Kernel, RingKernel};
use crate::quad::{GAUSS_QUAD_POINTS, GAUSS_QUAD_WEIGHTS};
use crate::util::Segment;

/// Direct panel-sum potential at `point = (r, z)`.
pub fn potential_radial(
    point: DVec2,
    segments: &[Segment],
    charges: &[[f64; N_QUAD_2D]],
) -> Result<f64, CoreError> {
    let kernel = RingKernel;
    let mut sum = 0.0;
    for (segment, segment_charges) in segments.iter().zip(charges) {
        let length = segment.length();
        for j in 0..N_QUAD_2D {
            let sample_factor = GAUSS_QUAD_POINTS[j] / 2.0 + 0.5;
            let sample = segment.point_at(sample_factor);
            let source = DVec2::new(sample.x, sample.y);
            sum += length / 2.0 * GAUSS_QUAD_WEIGHTS[j] * segment_charges[j]
                * kernel.potential(source, point)?;
        }
    }
    Ok(sum)
}

/// Direct panel-sum field at `point = (r, z)`; `E_phi` is always zero.
pub fn field_radial(
    point: DVec2,
    segments: &[Segment],
    charges: &[[f64; N_QUAD_2D]],
) -> Result<DVec3, CoreError> {
    let kernel = RingKernel;
    let mut e = DVec3::ZERO;
    for (segment, segment_charges) in segments.iter().zip(charges) {
        let length = segment.length();
        for k in 0..N_QUAD_2D {
            let length_factor = GAUSS_QUAD_POINTS[k] / 2.0 + 0.5;
            let sample = segment.point_at(length_factor);
            let source = DVec2::new(sample.x, sample.y);
            let weight = GAUSS_QUAD_WEIGHTS[k] * length / 2.0;
            let grad = kernel.gradient(source, point)?;
            e.x -= weight * segment_charges[k] * grad.x;
            e.y -= weight * segment_charges[k] * grad.y;
        }
    }
    Ok(e)
}

fn horner_quintic(coeffs: &[f64; 6], diffz: f64) -> f64 {
    coeffs[0] * diffz.powi(5)
        + coeffs[1] * diffz.powi(4)
        + coeffs[2] * diffz.powi(3)
        + coeffs[3] * diffz.powi(2)
        + coeffs[4] * diffz
        + coeffs[5]
}

fn evaluate_derivs(
    z: f64,
    z_grid: &[f64],
    coeffs: &[[[f64; 6]; DERIV_MAX]],
) -> Option<[f64; DERIV_MAX]> {
    let z0 = z_grid[0];
    let z_last = *z_grid.last().unwrap();
    if !(z0 < z && z < z_last) {
        return None;
    }
    let dz = z_grid[1] - z_grid[0];
    let index = ((z - z0) / dz) as usize;
    let diffz = z - z_grid[index];

    let mut derivs = [0.0; DERIV_MAX];
    for i in 0..DERIV_MAX {
        derivs[i] = horner_quintic(&coeffs[index][i], diffz);
    }
    Some(derivs)
}

/// Expansion-based potential. Returns zero outside the z-grid -- fields
/// decay to zero far from the optical elements, so this is a deliberate
/// silent default rather than an error.
pub fn potential_radial_derivs(
    point: DVec2,
    z_grid: &[f64],
    coeffs: &[[[f64; 6]; DERIV_MAX]],
) -> f64 {
    let (r, z) = (point.x, point.y);
    let Some(d) = evaluate_derivs(z, z_grid, coeffs) else {
        return 0.0;
    };
    d[0] - r.powi(2) * d[2] + r.powi(4) / 64.0 * d[4] - r.powi(6) / 2304.0 * d[6]
        + r.powi(8) / 147456.0 * d[8]
}

/// Expansion-based field. Returns zero outside the z-grid.
pub fn field_radial_derivs(point: DVec2, z_grid: &[f64], coeffs: &[[[f64; 6]; DERIV_MAX]]) -> DVec3 {
    let (r, z) = (point.x, point.y);
    let Some(d) = evaluate_derivs(z, z_grid, coeffs) else {
        return DVec3::ZERO;
    };
    let e_r = r / 2.0 * (d[2] - r.powi(2) / 8.0 * d[4] + r.powi(4) / 192.0 * d[6]
        - r.powi(6) / 9216.0 * d[8]);
    let e_z = -d[1] + r.powi(2) / 4.0 * d[3] - r.powi(4) / 64.0 * d[5] + r.powi(6) / 2304.0 * d[7];
    DVec3::new(e_r, e_z, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3 as V3;

    #[test]
    fn ring_on_axis_potential_matches_closed_form() {
        let segments = [Segment::new(V3::new(1.0, 0.0, 0.0), V3::new(1.0, 0.0, 0.0))];
        // Degenerate-length segment: use the direct kernel formula instead
        // to pin the same S1 scenario exercised in potential_radial_ring.
        let _ = segments;
        let kernel = RingKernel;
        let phi = kernel
            .potential(DVec2::new(1.0, 0.0), DVec2::new(0.0, 2.0))
            .unwrap();
        assert_relative_eq!(phi, 0.702481, epsilon = 1e-5);
    }

    #[test]
    fn expansion_evaluators_are_zero_outside_grid() {
        let coeffs = [[[0.0; 6]; DERIV_MAX]; 1];
        let z_grid = [0.0, 1.0];
        assert_eq!(potential_radial_derivs(DVec2::new(0.1, 5.0), &z_grid, &coeffs), 0.0);
        assert_eq!(field_radial_derivs(DVec2::new(0.1, 5.0), &z_grid, &coeffs), DVec3::ZERO);
    }
}
