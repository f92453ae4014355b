//! On-axis derivatives of the ring potential, accumulated per z-sample via
//! the three-term recurrence
//!
//! `D_{n+1} = -(1/R^2) * ((2n+1)*(z0-z)*D_n + n^2*D_{n-1})`
//!
//! bootstrapped from `D0 = 1/R`, `D1 = -(z0-z)/R^3`, and integrated along
//! each segment with the 8-point Gauss-Legendre rule.

use glam::DVec3;

use crate::constants::{DERIV_MAX, N_QUAD_2D};
use crate::quad::{GAUSS_QUAD_POINTS, GAUSS_QUAD_WEIGHTS};
use crate::util::Segment;

/// Accumulate the on-axis derivatives `D0..D8` of the total ring potential
/// into `derivs[k]` for each target height `z[k]`.
///
/// `charges[j]` holds the `N_QUAD_2D` nodal charge samples for segment `j`,
/// matching the Gauss-Legendre nodal basis the assembled matrix solves for.
pub fn axial_derivatives_radial_ring(
    derivs: &mut [[f64; DERIV_MAX]],
    segments: &[Segment],
    charges: &[[f64; N_QUAD_2D]],
    z: &[f64],
) {
    for (i, &z0) in z.iter().enumerate() {
        for (segment, segment_charges) in segments.iter().zip(charges) {
            let length = segment.length();
            for k in 0..N_QUAD_2D {
                let length_factor = GAUSS_QUAD_POINTS[k] / 2.0 + 0.5;
                let sample = segment.point_at(length_factor);
                let r = sample.x;
                let z_sample = sample.y;
                let weight = GAUSS_QUAD_WEIGHTS[k] * length / 2.0;

                let dz = z0 - z_sample;
                let big_r = DVec3::new(dz, r, 0.0).length();

                let mut d = [0.0; DERIV_MAX];
                d[0] = 1.0 / big_r;
                d[1] = -dz / big_r.powi(3);
                for n in 1..DERIV_MAX - 1 {
                    d[n + 1] = -1.0 / big_r.powi(2)
                        * ((2 * n + 1) as f64 * dz * d[n] + (n * n) as f64 * d[n - 1]);
                }

                let prefactor = weight * std::f64::consts::PI * r / 2.0 * segment_charges[k];
                for l in 0..DERIV_MAX {
                    derivs[i][l] += prefactor * d[l];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn single_segment_contributes_nonzero_d0() {
        let segments = [Segment::new(DVec3::new(0.9, 0.0, 0.0), DVec3::new(1.1, 0.0, 0.0))];
        let charges = [[1.0; N_QUAD_2D]];
        let mut derivs = [[0.0; DERIV_MAX]; 1];
        axial_derivatives_radial_ring(&mut derivs, &segments, &charges, &[2.0]);
        assert!(derivs[0][0] > 0.0);
    }
}
