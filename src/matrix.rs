//! Dense boundary-element matrix assembly, for both the axisymmetric
//! (radial, `Q=8`-nodal) and full-3D (one-collocation-per-triangle)
//! layouts.
//!
//! Row ranges are independent of one another -- a caller may invoke
//! `fill_matrix_radial`/`fill_matrix_3d` concurrently with disjoint
//! `[row_start, row_end]` ranges, the same way a pure per-step integrator
//! is safe to call from many threads at once. This crate does not own a
//! thread pool; that choice is left to the caller.

use glam::{DVec2, DVec3};
use tracing::debug;

use crate::constants::{N_LOG_QUAD_2D, N_QUAD_2D};
use crate::error::CoreError;
use crate::kernel::{Kernel, Point3dKernel, RingKernel};
use crate::quad::{legendre, legendre_coefficient, GAUSS_LOG_QUAD_POINTS, GAUSS_LOG_QUAD_WEIGHTS, GAUSS_QUAD_POINTS, GAUSS_QUAD_WEIGHTS};
use crate::util::{normal_2d, Segment, Triangle};

/// Boundary condition carried by a panel. The dielectric permittivity
/// ratio is carried as payload rather than a side-channel value array, so
/// an inconsistent (tag, value) pair cannot be constructed.
#[derive(Debug, Clone, Copy)]
pub enum ExcitationKind {
    VoltageFixed,
    VoltageFunctional,
    Dielectric { k: f64 },
    FloatingConductor,
}

fn dielectric_factor(k: f64) -> f64 {
    (2.0 * k - 2.0) / (std::f64::consts::PI * (1.0 + k))
}

fn log_integral(segment: &Segment, l: usize, k: usize) -> Result<f64, CoreError> {
    let kernel = RingKernel;
    let length = segment.length();

    let length_factor = GAUSS_QUAD_POINTS[l] / 2.0 + 0.5;
    let singular_point = segment.point_at(length_factor);
    let singular_length = length * length_factor;

    let mut sum = 0.0;
    for o in 0..N_LOG_QUAD_2D {
        let p = GAUSS_LOG_QUAD_POINTS[o];
        let w = GAUSS_LOG_QUAD_WEIGHTS[o];

        let length_left = singular_length - singular_length * p;
        let sampled = segment.point_at(length_left / length);
        let legendre_arg = 2.0 * length_left / length - 1.0;
        for m in 0..N_QUAD_2D {
            let pot = kernel.potential(
                DVec2::new(sampled.x, sampled.y),
                DVec2::new(singular_point.x, singular_point.y),
            )?;
            sum += w * singular_length * legendre_coefficient(m, k)? * legendre(m, legendre_arg)? * pot;
        }

        let length_right = singular_length + (length - singular_length) * p;
        let sampled = segment.point_at(length_right / length);
        let legendre_arg = 2.0 * length_right / length - 1.0;
        for m in 0..N_QUAD_2D {
            let pot = kernel.potential(
                DVec2::new(sampled.x, sampled.y),
                DVec2::new(singular_point.x, singular_point.y),
            )?;
            sum += w * (length - singular_length) * legendre_coefficient(m, k)? * legendre(m, legendre_arg)? * pot;
        }
    }
    Ok(sum)
}

fn matrix_index(n_matrix: usize, row: usize, col: usize) -> usize {
    row * n_matrix + col
}

/// Fill the self-panel (diagonal `Q x Q`) blocks of the radial matrix via
/// the log-singular quadrature. Dielectric rows are skipped: their
/// self-block is already filled by the field-dot-normal accumulation and
/// `-1` diagonal subtraction in `fill_matrix_radial`'s dielectric branch.
fn fill_self_voltages(
    matrix: &mut [f64],
    segments: &[Segment],
    excitations: &[ExcitationKind],
    n_matrix: usize,
    row_start: usize,
    row_end: usize,
) -> Result<(), CoreError> {
    for i in row_start..=row_end {
        if matches!(excitations[i], ExcitationKind::Dielectric { .. }) {
            continue;
        }
        let segment = &segments[i];
        for l in 0..N_QUAD_2D {
            for k in 0..N_QUAD_2D {
                let idx = matrix_index(n_matrix, N_QUAD_2D * i + l, N_QUAD_2D * i + k);
                matrix[idx] = log_integral(segment, l, k)?;
            }
        }
    }
    Ok(())
}

/// Assemble the dense axisymmetric matrix, one `Q=8`-node nodal-charge
/// basis per segment. `matrix` must have length `(N*Q)^2`.
pub fn fill_matrix_radial(
    matrix: &mut [f64],
    segments: &[Segment],
    excitations: &[ExcitationKind],
    row_start: usize,
    row_end: usize,
) -> Result<(), CoreError> {
    let n_lines = segments.len();
    let n_matrix = n_lines * N_QUAD_2D;
    if matrix.len() != n_matrix * n_matrix {
        return Err(CoreError::ShapeMismatch { expected: n_matrix * n_matrix, actual: matrix.len() });
    }

    debug!(row_start, row_end, n_lines, "filling radial matrix rows");

    let kernel = RingKernel;

    for i in row_start..=row_end {
        let target_segment = &segments[i];

        match excitations[i] {
            ExcitationKind::VoltageFixed | ExcitationKind::VoltageFunctional | ExcitationKind::FloatingConductor => {
                for j in 0..n_lines {
                    if i == j {
                        continue;
                    }
                    let source_segment = &segments[j];
                    let source_length = source_segment.length();

                    for l in 0..N_QUAD_2D {
                        let target = target_segment.point_at(GAUSS_QUAD_POINTS[l] / 2.0 + 0.5);
                        for k in 0..N_QUAD_2D {
                            let source = source_segment.point_at(GAUSS_QUAD_POINTS[k] / 2.0 + 0.5);
                            let weight = GAUSS_QUAD_WEIGHTS[k] * source_length / 2.0;
                            let idx = matrix_index(n_matrix, N_QUAD_2D * i + l, N_QUAD_2D * j + k);
                            matrix[idx] = weight
                                * kernel.potential(
                                    DVec2::new(source.x, source.y),
                                    DVec2::new(target.x, target.y),
                                )?;
                        }
                    }
                }
            }
            ExcitationKind::Dielectric { k } => {
                let normal = normal_2d(
                    DVec2::new(target_segment.v1.x, target_segment.v1.y),
                    DVec2::new(target_segment.v2.x, target_segment.v2.y),
                )?;
                let normal3 = DVec3::new(normal.x, normal.y, 0.0);
                let factor = dielectric_factor(k);

                for l in 0..N_QUAD_2D {
                    let target = target_segment.point_at(GAUSS_QUAD_POINTS[l] / 2.0 + 0.5);
                    for j in 0..n_lines {
                        let source_segment = &segments[j];
                        let source_length = source_segment.length();
                        for sk in 0..N_QUAD_2D {
                            // A target node coinciding with its own source node sits
                            // exactly on the singular point; leave that entry at its
                            // pre-subtraction default of zero rather than evaluate
                            // the kernel there.
                            if i == j && l == sk {
                                continue;
                            }
                            let source = source_segment.point_at(GAUSS_QUAD_POINTS[sk] / 2.0 + 0.5);
                            let weight = GAUSS_QUAD_WEIGHTS[sk] * source_length / 2.0;
                            let contribution = weight
                                * factor
                                * kernel.field_dot_normal(
                                    DVec2::new(source.x, source.y),
                                    DVec2::new(target.x, target.y),
                                    normal3,
                                )?;
                            let idx = matrix_index(n_matrix, N_QUAD_2D * i + l, N_QUAD_2D * j + sk);
                            matrix[idx] += contribution;
                        }
                    }
                    let diag = matrix_index(n_matrix, N_QUAD_2D * i + l, N_QUAD_2D * i + l);
                    matrix[diag] -= 1.0;
                }
            }
        }
    }

    fill_self_voltages(matrix, segments, excitations, n_matrix, row_start, row_end)
}

fn triangle_integral_potential_3d(target: DVec3, source: &Triangle) -> Result<f64, CoreError> {
    crate::field::three_d::potential_3d(target, std::slice::from_ref(source), &[1.0])
}

fn triangle_integral_field_dot_normal(target: DVec3, source: &Triangle, normal: DVec3) -> Result<f64, CoreError> {
    let kernel = Point3dKernel;
    let area = source.area();
    let mut sum = 0.0;
    for k in 0..crate::constants::N_TRIANGLE_QUAD {
        let p = source.point_at(
            crate::quad::TRIANGLE_QUAD_B1[k],
            crate::quad::TRIANGLE_QUAD_B2[k],
        );
        sum += crate::quad::TRIANGLE_QUAD_WEIGHTS[k] * kernel.field_dot_normal(p, target, normal)?;
    }
    Ok(area * sum)
}

/// Assemble the dense full-3D matrix, one collocation point (centroid) per
/// triangle. `matrix` must have length `N*N`.
pub fn fill_matrix_3d(
    matrix: &mut [f64],
    triangles: &[Triangle],
    excitations: &[ExcitationKind],
    row_start: usize,
    row_end: usize,
) -> Result<(), CoreError> {
    let n = triangles.len();
    if matrix.len() != n * n {
        return Err(CoreError::ShapeMismatch { expected: n * n, actual: matrix.len() });
    }

    debug!(row_start, row_end, n, "filling 3d matrix rows");

    for i in row_start..=row_end {
        let target_triangle = &triangles[i];
        let target = target_triangle.centroid();

        match excitations[i] {
            ExcitationKind::VoltageFixed | ExcitationKind::VoltageFunctional | ExcitationKind::FloatingConductor => {
                for j in 0..n {
                    matrix[matrix_index(n, i, j)] = triangle_integral_potential_3d(target, &triangles[j])?;
                }
            }
            ExcitationKind::Dielectric { k } => {
                let normal = target_triangle.outward_normal()?;
                let factor = dielectric_factor(k);
                for j in 0..n {
                    let mut value = factor * triangle_integral_field_dot_normal(target, &triangles[j], normal)?;
                    if i == j {
                        value -= 1.0;
                    }
                    matrix[matrix_index(n, i, j)] = value;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3 as V3;

    #[test]
    fn voltage_matrix_is_symmetric_cross_block() {
        let segments = [
            Segment::new(V3::new(0.9, 0.0, 0.0), V3::new(1.1, 0.0, 0.0)),
            Segment::new(V3::new(0.9, 5.0, 0.0), V3::new(1.1, 5.0, 0.0)),
        ];
        let excitations = [ExcitationKind::VoltageFixed, ExcitationKind::VoltageFixed];
        let n_matrix = segments.len() * N_QUAD_2D;
        let mut matrix = vec![0.0; n_matrix * n_matrix];
        fill_matrix_radial(&mut matrix, &segments, &excitations, 0, 1).unwrap();

        // Both segments share the same r-profile (only z differs), so a
        // node compared against the matching node (same quadrature index,
        // hence same r) on the other segment gives r_target == r_source
        // and the kernel's Phi(a;b) = Phi(b;a)*(r_a/r_b) identity collapses
        // to plain symmetry.
        for l in 0..N_QUAD_2D {
            let a = matrix[matrix_index(n_matrix, l, N_QUAD_2D + l)];
            let b = matrix[matrix_index(n_matrix, N_QUAD_2D + l, l)];
            assert!((a - b).abs() < 1e-6, "a={a} b={b}");
        }
    }

    #[test]
    fn unknown_shape_is_rejected() {
        let segments = [Segment::new(V3::new(0.9, 0.0, 0.0), V3::new(1.1, 0.0, 0.0))];
        let excitations = [ExcitationKind::VoltageFixed];
        let mut matrix = vec![0.0; 3];
        assert!(fill_matrix_radial(&mut matrix, &segments, &excitations, 0, 0).is_err());
    }
}
