//! Full-3D potential and field evaluation, direct and expansion-based.

use glam::DVec3;

use crate::axial::fourier3d::ZSplineCoeffs3d;
use crate::constants::{EPS_AXIS, M_MAX, NU_MAX, N_TRIANGLE_QUAD};
use crate::error::CoreError;
use crate::kernel::{Kernel, Point3dKernel};
use crate::quad::{TRIANGLE_QUAD_B1, TRIANGLE_QUAD_B2, TRIANGLE_QUAD_WEIGHTS};
use crate::util::Triangle;

fn triangle_integral<F>(target: DVec3, triangle: &Triangle, f: F) -> f64
where
    F: Fn(DVec3, DVec3) -> f64,
{
    let area = triangle.area();
    let mut sum = 0.0;
    for k in 0..N_TRIANGLE_QUAD {
        let p = triangle.point_at(TRIANGLE_QUAD_B1[k], TRIANGLE_QUAD_B2[k]);
        sum += TRIANGLE_QUAD_WEIGHTS[k] * f(target, p);
    }
    area * sum
}

pub fn potential_3d(point: DVec3, triangles: &[Triangle], charges: &[f64]) -> Result<f64, CoreError> {
    let kernel = Point3dKernel;
    let mut sum = 0.0;
    for (triangle, &charge) in triangles.iter().zip(charges) {
        sum += charge * triangle_integral(point, triangle, |t, p| kernel.potential(p, t).unwrap());
    }
    Ok(sum)
}

pub fn field_3d(point: DVec3, triangles: &[Triangle], charges: &[f64]) -> Result<DVec3, CoreError> {
    let kernel = Point3dKernel;
    let mut e = DVec3::ZERO;
    for (triangle, &charge) in triangles.iter().zip(charges) {
        e.x -= charge * triangle_integral(point, triangle, |t, p| kernel.gradient(p, t).unwrap().x);
        e.y -= charge * triangle_integral(point, triangle, |t, p| kernel.gradient(p, t).unwrap().y);
        e.z -= charge * triangle_integral(point, triangle, |t, p| kernel.gradient(p, t).unwrap().z);
    }
    Ok(e)
}

fn horner_cubic(c: &[f64; 4], t: f64) -> f64 {
    t.powi(3) * c[0] + t.powi(2) * c[1] + t * c[2] + c[3]
}

fn horner_cubic_deriv(c: &[f64; 4], t: f64) -> f64 {
    3.0 * t.powi(2) * c[0] + 2.0 * t * c[1] + c[2]
}

struct EvaluatedSeries {
    a: [[f64; M_MAX]; NU_MAX],
    b: [[f64; M_MAX]; NU_MAX],
}

fn evaluate_series(z: f64, z_grid: &[f64], coeffs: &[ZSplineCoeffs3d]) -> Option<(EvaluatedSeries, f64)> {
    let z0 = z_grid[0];
    let z_last = *z_grid.last().unwrap();
    if !(z0 < z && z < z_last) {
        return None;
    }
    let dz = z_grid[1] - z_grid[0];
    let index = ((z - z0) / dz) as usize;
    let diffz = z - z_grid[index];

    let mut a = [[0.0; M_MAX]; NU_MAX];
    let mut b = [[0.0; M_MAX]; NU_MAX];
    for nu in 0..NU_MAX {
        for m in 0..M_MAX {
            a[nu][m] = horner_cubic(&coeffs[index][0][nu][m], diffz);
            b[nu][m] = horner_cubic(&coeffs[index][1][nu][m], diffz);
        }
    }
    Some((EvaluatedSeries { a, b }, diffz))
}

/// Expansion-based potential; zero outside the z-grid.
pub fn potential_3d_derivs(point: DVec3, z_grid: &[f64], coeffs: &[ZSplineCoeffs3d]) -> f64 {
    let Some((series, _)) = evaluate_series(point.z, z_grid, coeffs) else {
        return 0.0;
    };
    let r = point.truncate().length();
    let phi = point.y.atan2(point.x);

    let mut sum = 0.0;
    for nu in 0..NU_MAX {
        for m in 0..M_MAX {
            let exp = (m + 2 * nu) as i32;
            sum += (series.a[nu][m] * (m as f64 * phi).cos()
                + series.b[nu][m] * (m as f64 * phi).sin())
                * r.powi(exp);
        }
    }
    sum
}

/// Expansion-based field; zero outside the z-grid, with a closed-form
/// near-axis branch to avoid the `1/r` singularity in the angular terms.
pub fn field_3d_derivs(point: DVec3, z_grid: &[f64], coeffs: &[ZSplineCoeffs3d]) -> DVec3 {
    let z0 = z_grid[0];
    let z_last = *z_grid.last().unwrap();
    if !(z0 < point.z && point.z < z_last) {
        return DVec3::ZERO;
    }
    let dz = z_grid[1] - z_grid[0];
    let index = ((point.z - z0) / dz) as usize;
    let diffz = point.z - z_grid[index];

    let mut a = [[0.0; M_MAX]; NU_MAX];
    let mut b = [[0.0; M_MAX]; NU_MAX];
    let mut a_diff = [[0.0; M_MAX]; NU_MAX];
    let mut b_diff = [[0.0; M_MAX]; NU_MAX];
    for nu in 0..NU_MAX {
        for m in 0..M_MAX {
            a[nu][m] = horner_cubic(&coeffs[index][0][nu][m], diffz);
            b[nu][m] = horner_cubic(&coeffs[index][1][nu][m], diffz);
            a_diff[nu][m] = horner_cubic_deriv(&coeffs[index][0][nu][m], diffz);
            b_diff[nu][m] = horner_cubic_deriv(&coeffs[index][1][nu][m], diffz);
        }
    }

    let r = point.truncate().length();
    let phi = point.y.atan2(point.x);

    if r < EPS_AXIS {
        return DVec3::new(-a[0][1], -b[0][1], -a_diff[0][0]);
    }

    let mut field = DVec3::ZERO;
    for nu in 0..NU_MAX {
        for m in 0..M_MAX {
            let exp = (2 * nu + m) as i32;
            let diff_r = (a[nu][m] * (m as f64 * phi).cos() + b[nu][m] * (m as f64 * phi).sin())
                * exp as f64
                * r.powi(exp - 1);
            let diff_theta = m as f64
                * (-a[nu][m] * (m as f64 * phi).sin() + b[nu][m] * (m as f64 * phi).cos())
                * r.powi(exp);

            field.x -= diff_r * point.x / r + diff_theta * (-point.y) / r.powi(2);
            field.y -= diff_r * point.y / r + diff_theta * point.x / r.powi(2);
            field.z -= (a_diff[nu][m] * (m as f64 * phi).cos() + b_diff[nu][m] * (m as f64 * phi).sin())
                * r.powi(exp);
        }
    }
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potential_is_zero_outside_grid() {
        let coeffs = [ZSplineCoeffs3d::default(); 1];
        assert_eq!(potential_3d_derivs(DVec3::new(0.0, 0.0, 5.0), &[0.0, 1.0], &coeffs), 0.0);
    }
}
