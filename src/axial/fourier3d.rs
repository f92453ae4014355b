//! Fourier-radial coefficient accumulation for full 3D geometries.
//!
//! For each z-sample and each triangle quadrature point, the potential is
//! decomposed into cylindrical harmonics `cos(m*mu)*r^(-2nu-m-1)` and
//! `sin(m*mu)*r^(-2nu-m-1)`, weighted by a cubic spline-of-theta basis
//! looked up by `atan2(z - z0, sqrt(x^2+y^2))`.

use glam::DVec3;

use crate::constants::{M_MAX, NU_MAX, N_TRIANGLE_QUAD};
use crate::quad::{TRIANGLE_QUAD_B1, TRIANGLE_QUAD_B2, TRIANGLE_QUAD_WEIGHTS};
use crate::util::Triangle;

/// Cubic spline-of-theta coefficients, one `[nu][m]` table per theta
/// interval, in descending power order (t^3, t^2, t, 1).
pub type ThetaCoeffs = [[[f64; 4]; M_MAX]; NU_MAX];

/// Output accumulator: `[z-sample][part][nu][m]`, part 0 is the cosine
/// (A) series, part 1 is the sine (B) series.
pub type FourierCoeffs = [[[f64; M_MAX]; NU_MAX]; 2];

/// Per-z-interval cubic spline coefficients fitted to [`FourierCoeffs`]
/// samples along the z-grid, in descending power order (t^3, t^2, t, 1).
/// Matches SPEC_FULL.md's `coeffs[Nz][2][NU=4][M=8][4]` expansion-table
/// shape consumed by `field::three_d`'s z-interpolating evaluators.
pub type ZSplineCoeffs3d = [[[[f64; 4]; M_MAX]; NU_MAX]; 2];

pub fn axial_coefficients_3d(
    output: &mut [FourierCoeffs],
    triangles: &[Triangle],
    charges: &[f64],
    z: &[f64],
    thetas: &[f64],
    theta_coeffs: &[ThetaCoeffs],
) {
    let theta0 = thetas[0];
    let dtheta = thetas[1] - thetas[0];

    for (triangle, &charge) in triangles.iter().zip(charges) {
        let area = triangle.area();

        for (i, &z0) in z.iter().enumerate() {
            for k in 0..N_TRIANGLE_QUAD {
                let b1 = TRIANGLE_QUAD_B1[k];
                let b2 = TRIANGLE_QUAD_B2[k];
                let w = TRIANGLE_QUAD_WEIGHTS[k];

                let p = triangle.point_at(b1, b2);
                let dz = p.z - z0;
                let r = DVec3::new(p.x, p.y, dz).length();
                let theta = dz.atan2(p.truncate().length());
                let mu = p.y.atan2(p.x);

                let index = ((theta - theta0) / dtheta) as usize;
                let t = theta - thetas[index];
                let spline = &theta_coeffs[index];

                for nu in 0..NU_MAX {
                    for m in 0..M_MAX {
                        let c = &spline[nu][m];
                        let base = t.powi(3) * c[0] + t.powi(2) * c[1] + t * c[2] + c[3];
                        let r_dependence = r.powi(-(2 * nu as i32 + m as i32 + 1));

                        output[i][0][nu][m] += charge * area * w * base * (m as f64 * mu).cos() * r_dependence;
                        output[i][1][nu][m] += charge * area * w * base * (m as f64 * mu).sin() * r_dependence;
                    }
                }
            }
        }
    }
}
