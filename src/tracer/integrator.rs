//! Adaptive Runge-Kutta-Fehlberg 4(5) integration of the Lorentz equation
//! over the 6-D phase state `(x, y, z, vx, vy, vz)`.
//!
//! The stage/weight tables below are the Runge-Kutta-Fehlberg coefficients
//! this tracer is built against (distinct from, and not interchangeable
//! with, a textbook RKF45 tableau using `A = (0, 1/4, 3/8, ...)`); get them
//! wrong and the embedded error estimate silently stops bounding anything.

use crate::constants::{EM, TRACING_BLOCK_SIZE};
use crate::error::CoreError;

// The stage-time fractions (0, 2/9, 1/3, 3/4, 1, 5/6) are part of this
// tableau's usual presentation but never feed the computation below: the
// field evaluators in this crate are autonomous (no explicit time
// dependence), so only the stage *coefficients* below are needed.
const B2: [f64; 1] = [2.0 / 9.0];
const B3: [f64; 2] = [1.0 / 12.0, 1.0 / 4.0];
const B4: [f64; 3] = [69.0 / 128.0, -243.0 / 128.0, 135.0 / 64.0];
const B5: [f64; 4] = [-17.0 / 12.0, 27.0 / 4.0, -27.0 / 5.0, 16.0 / 15.0];
const B6: [f64; 5] = [65.0 / 432.0, -5.0 / 16.0, 13.0 / 16.0, 4.0 / 27.0, 5.0 / 144.0];
const CH: [f64; 6] = [47.0 / 450.0, 0.0, 12.0 / 25.0, 32.0 / 225.0, 1.0 / 30.0, 6.0 / 25.0];
const CT: [f64; 6] = [-1.0 / 150.0, 0.0, 3.0 / 100.0, -16.0 / 75.0, -1.0 / 20.0, 6.0 / 25.0];

/// Policy knobs for the adaptive tracer, exposing the two source-variant
/// discrepancies documented in this crate's design notes as explicit
/// configuration rather than baked-in constants.
#[derive(Debug, Clone, Copy)]
pub struct TracerOptions {
    /// Initial/maximum step size numerator: `h_max = step_max / ||v0||`.
    pub step_max: f64,
    /// Lower bound below which a rejected step is force-accepted instead
    /// of retried. `None` reproduces "retry until the error tolerance is
    /// met, with no floor" -- the behavior this crate defaults to.
    pub min_step: Option<f64>,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self { step_max: 0.01, min_step: None }
    }
}

type Phase = [f64; 6];

fn add_scaled(y: &Phase, terms: &[(Phase, f64)]) -> Phase {
    let mut out = *y;
    for (k, s) in terms {
        for i in 0..6 {
            out[i] += k[i] * s;
        }
    }
    out
}

fn derivative(state: &Phase, field: &mut impl FnMut([f64; 3]) -> Result<[f64; 3], CoreError>) -> Result<Phase, CoreError> {
    let e = field([state[0], state[1], state[2]])?;
    Ok([
        state[3],
        state[4],
        state[5],
        EM * e[0],
        EM * e[1],
        EM * e[2],
    ])
}

/// One adaptive RKF45 attempt: returns the tentative new state and the
/// truncation error estimate `TE = max_i |sum_j CT_j * k_j[i]|`.
///
/// Stage `k` is scaled by `h`, so `ys[index]` -- the state the field is
/// evaluated at for that stage -- always reads velocity from the
/// *current* stage state, never from a previous stage's derivative. This
/// is the "ys-based" form: adopted deliberately over the alternative
/// variant that reuses the previous stage's derivative as this stage's
/// velocity, which is an off-by-one error in the embedded field's source.
fn rkf45_stage(
    y: &Phase,
    h: f64,
    field: &mut impl FnMut([f64; 3]) -> Result<[f64; 3], CoreError>,
) -> Result<(Phase, f64), CoreError> {
    let mut ys: [Phase; 6] = [[0.0; 6]; 6];
    let mut ks: [Phase; 6] = [[0.0; 6]; 6];

    for index in 0..6 {
        let coefficients: &[f64] = match index {
            0 => &[],
            1 => &B2,
            2 => &B3,
            3 => &B4,
            4 => &B5,
            5 => &B6,
            _ => unreachable!(),
        };
        let terms: Vec<(Phase, f64)> = coefficients
            .iter()
            .enumerate()
            .map(|(j, &c)| (ks[j], c))
            .collect();
        ys[index] = add_scaled(y, &terms);

        let d = derivative(&ys[index], field)?;
        let mut k = [0.0; 6];
        for i in 0..6 {
            k[i] = h * d[i];
        }
        ks[index] = k;
    }

    let mut te = 0.0f64;
    for i in 0..6 {
        let mut err = 0.0;
        for j in 0..6 {
            err += CT[j] * ks[j][i];
        }
        te = te.max(err.abs());
    }

    let mut new_y = *y;
    for i in 0..6 {
        new_y[i] += CH.iter().zip(ks.iter()).map(|(c, k)| c * k[i]).sum::<f64>();
    }

    Ok((new_y, te))
}

/// Integrate a charged particle's trajectory through `field` until it
/// leaves `bounds` or the output block fills.
///
/// `times[0]`/`positions[0]` must already hold the initial sample; this
/// function writes subsequent accepted samples starting at index 1 and
/// returns the number of samples written (including the initial one).
pub fn trace_particle(
    times: &mut [f64],
    positions: &mut [[f64; 6]],
    bounds: [[f64; 2]; 3],
    atol: f64,
    options: &TracerOptions,
    mut field: impl FnMut([f64; 3]) -> Result<[f64; 3], CoreError>,
) -> Result<usize, CoreError> {
    let mut y = positions[0];
    let v_norm = (y[3] * y[3] + y[4] * y[4] + y[5] * y[5]).sqrt();
    let h_max = options.step_max / v_norm;
    let mut h = h_max;

    let mut n = 1usize;
    let in_bounds = |y: &Phase| {
        (bounds[0][0]..=bounds[0][1]).contains(&y[0])
            && (bounds[1][0]..=bounds[1][1]).contains(&y[1])
            && (bounds[2][0]..=bounds[2][1]).contains(&y[2])
    };

    while in_bounds(&y) {
        let (new_y, te) = rkf45_stage(&y, h, &mut field)?;

        if te <= atol {
            y = new_y;
            positions[n] = y;
            times[n] = times[n - 1] + h;
            n += 1;
            if n == TRACING_BLOCK_SIZE {
                return Ok(n);
            }
            h = (0.9 * h * (atol / te).powf(0.2)).min(h_max);
        } else if let Some(min_step) = options.min_step {
            if h.abs() <= min_step {
                let (forced, _) = rkf45_stage(&y, min_step * h.signum(), &mut field)?;
                y = forced;
                positions[n] = y;
                times[n] = times[n - 1] + min_step * h.signum();
                n += 1;
                if n == TRACING_BLOCK_SIZE {
                    return Ok(n);
                }
            } else {
                h = (0.9 * h * (atol / te).powf(0.2)).max(min_step * h.signum());
            }
        } else {
            h = 0.9 * h * (atol / te).powf(0.2);
        }
    }

    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rk_stage_uses_current_state_velocity() {
        // With a zero field, velocity never changes, so every stage's
        // position derivative must equal its own state's velocity
        // component -- pinning the ys-based produce_new_k form.
        let y = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
        let (new_y, te) = rkf45_stage(&y, 0.1, &mut |_| Ok([0.0, 0.0, 0.0])).unwrap();
        assert!((new_y[0] - 0.1).abs() < 1e-9);
        assert!((new_y[1] - 0.2).abs() < 1e-9);
        assert!((new_y[2] - 0.3).abs() < 1e-9);
        assert!(te.abs() < 1e-12);
    }

    #[test]
    fn free_flight_is_monotone_in_z() {
        let mut times = [0.0; 8];
        let mut positions = [[0.0; 6]; 8];
        positions[0] = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0];
        // Zero field pins every step to h_max = step_max / |v| = 0.01, so a
        // tight bound keeps the trajectory within the 8-slot buffer above.
        let bounds = [[-10.0, 10.0], [-10.0, 10.0], [0.0, 0.05]];
        let n = trace_particle(&mut times, &mut positions, bounds, 1e-6, &TracerOptions::default(), |_| {
            Ok([0.0, 0.0, 0.0])
        })
        .unwrap();
        for i in 1..n {
            assert!(positions[i][2] > positions[i - 1][2]);
        }
    }
}
