//! Wiring the field evaluators in [`crate::field`] into the generic
//! [`super::trace_particle`] engine, one wrapper per (geometry, direct vs.
//! expansion) combination.

use glam::{DVec2, DVec3};

use crate::constants::{DERIV_MAX, N_QUAD_2D};
use crate::error::CoreError;
use crate::field::{radial, three_d};
use crate::util::{Segment, Triangle};

use super::integrator::{trace_particle, TracerOptions};

/// Trace through the field of an axisymmetric panel set, evaluated
/// directly from nodal charges on every step.
pub fn trace_particle_radial(
    times: &mut [f64],
    positions: &mut [[f64; 6]],
    bounds: [[f64; 2]; 3],
    atol: f64,
    segments: &[Segment],
    charges: &[[f64; N_QUAD_2D]],
    options: &TracerOptions,
) -> Result<usize, CoreError> {
    trace_particle(times, positions, bounds, atol, options, |p| {
        let point = DVec2::new((p[0] * p[0] + p[1] * p[1]).sqrt(), p[2]);
        let field = radial::field_radial(point, segments, charges)?;
        if point.x < crate::constants::EPS_AXIS {
            return Ok([0.0, 0.0, field.y]);
        }
        let cos_t = p[0] / point.x;
        let sin_t = p[1] / point.x;
        Ok([field.x * cos_t, field.x * sin_t, field.y])
    })
}

/// Trace through an axisymmetric field's precomputed on-axis expansion.
pub fn trace_particle_radial_derivs(
    times: &mut [f64],
    positions: &mut [[f64; 6]],
    bounds: [[f64; 2]; 3],
    atol: f64,
    z_grid: &[f64],
    coeffs: &[[[f64; 6]; DERIV_MAX]],
    options: &TracerOptions,
) -> Result<usize, CoreError> {
    trace_particle(times, positions, bounds, atol, options, |p| {
        let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
        let field = radial::field_radial_derivs(DVec2::new(r, p[2]), z_grid, coeffs);
        if r < crate::constants::EPS_AXIS {
            return Ok([0.0, 0.0, field.y]);
        }
        let cos_t = p[0] / r;
        let sin_t = p[1] / r;
        Ok([field.x * cos_t, field.x * sin_t, field.y])
    })
}

/// Trace through the field of a full-3D triangulated panel set, evaluated
/// directly from panel charges on every step.
pub fn trace_particle_3d(
    times: &mut [f64],
    positions: &mut [[f64; 6]],
    bounds: [[f64; 2]; 3],
    atol: f64,
    triangles: &[Triangle],
    charges: &[f64],
    options: &TracerOptions,
) -> Result<usize, CoreError> {
    trace_particle(times, positions, bounds, atol, options, |p| {
        let field = three_d::field_3d(DVec3::new(p[0], p[1], p[2]), triangles, charges)?;
        Ok([field.x, field.y, field.z])
    })
}

/// Trace through a full-3D field's precomputed Fourier-radial expansion.
pub fn trace_particle_3d_derivs(
    times: &mut [f64],
    positions: &mut [[f64; 6]],
    bounds: [[f64; 2]; 3],
    atol: f64,
    z_grid: &[f64],
    coeffs: &[crate::axial::fourier3d::ZSplineCoeffs3d],
    options: &TracerOptions,
) -> Result<usize, CoreError> {
    trace_particle(times, positions, bounds, atol, options, |p| {
        let field = three_d::field_3d_derivs(DVec3::new(p[0], p[1], p[2]), z_grid, coeffs);
        Ok([field.x, field.y, field.z])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radial_trace_runs_in_field_free_region() {
        let segments: [Segment; 0] = [];
        let charges: [[f64; N_QUAD_2D]; 0] = [];
        let mut times = [0.0; 4];
        let mut positions = [[0.0; 6]; 4];
        positions[0] = [0.1, 0.0, 0.0, 0.0, 0.0, 1.0];
        // Zero field pins every step to h_max = step_max / |v| = 0.01, so a
        // tight bound keeps the trajectory within the 4-slot buffer above.
        let bounds = [[-10.0, 10.0], [-10.0, 10.0], [0.0, 0.02]];
        let n = trace_particle_radial(
            &mut times,
            &mut positions,
            bounds,
            1e-6,
            &segments,
            &charges,
            &TracerOptions::default(),
        )
        .unwrap();
        assert!(n > 1);
    }

    #[test]
    fn three_d_trace_runs_in_field_free_region() {
        let triangles: [Triangle; 0] = [];
        let charges: [f64; 0] = [];
        let mut times = [0.0; 4];
        let mut positions = [[0.0; 6]; 4];
        positions[0] = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        // Zero field pins every step to h_max = step_max / |v| = 0.01, so a
        // tight bound keeps the trajectory within the 4-slot buffer above.
        let bounds = [[-10.0, 10.0], [-10.0, 10.0], [0.0, 0.02]];
        let n = trace_particle_3d(
            &mut times,
            &mut positions,
            bounds,
            1e-6,
            &triangles,
            &charges,
            &TracerOptions::default(),
        )
        .unwrap();
        assert!(n > 1);
    }
}
