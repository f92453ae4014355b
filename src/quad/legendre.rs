//! Legendre polynomials P0..P8 in closed form, and the nodal-basis
//! coefficient used to project the self-panel quadrature onto them.
//!
//! Orders above 8 are deliberately unimplemented: the original backend
//! keeps the higher-order closed forms commented out in source and aborts
//! the process if one is ever requested. This port returns a typed error
//! at the same boundary instead of aborting.

use crate::constants::LEGENDRE_MAX_ORDER;
use crate::error::CoreError;
use crate::quad::rules::{GAUSS_QUAD_POINTS, GAUSS_QUAD_WEIGHTS};

/// Evaluate the Legendre polynomial of order `n` at `x`.
pub fn legendre(n: usize, x: f64) -> Result<f64, CoreError> {
    let value = match n {
        0 => 1.0,
        1 => x,
        2 => (3.0 * x.powi(2) - 1.0) / 2.0,
        3 => (5.0 * x.powi(3) - 3.0 * x) / 2.0,
        4 => (35.0 * x.powi(4) - 30.0 * x.powi(2) + 3.0) / 8.0,
        5 => (63.0 * x.powi(5) - 70.0 * x.powi(3) + 15.0 * x) / 8.0,
        6 => (231.0 * x.powi(6) - 315.0 * x.powi(4) + 105.0 * x.powi(2) - 5.0) / 16.0,
        7 => (429.0 * x.powi(7) - 693.0 * x.powi(5) + 315.0 * x.powi(3) - 35.0 * x) / 16.0,
        8 => {
            (6435.0 * x.powi(8) - 12012.0 * x.powi(6) + 6930.0 * x.powi(4) - 1260.0 * x.powi(2)
                + 35.0)
                / 128.0
        }
        order => return Err(CoreError::LegendreOrder { order }),
    };
    debug_assert!(n <= LEGENDRE_MAX_ORDER);
    Ok(value)
}

/// Coefficient of `P_i` in the nodal expansion sampled at Gauss node `j`:
/// `W_j * P_i(x_j) * (2i + 1) / 2`.
pub fn legendre_coefficient(i: usize, j: usize) -> Result<f64, CoreError> {
    Ok(GAUSS_QUAD_WEIGHTS[j] * legendre(i, GAUSS_QUAD_POINTS[j])? * (2 * i + 1) as f64 / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p0_is_constant_one() {
        assert_eq!(legendre(0, 0.3).unwrap(), 1.0);
        assert_eq!(legendre(0, -0.7).unwrap(), 1.0);
    }

    #[test]
    fn p1_is_identity() {
        assert_eq!(legendre(1, 0.42).unwrap(), 0.42);
    }

    #[test]
    fn order_nine_is_a_domain_error() {
        assert_eq!(legendre(9, 0.0), Err(CoreError::LegendreOrder { order: 9 }));
    }
}
