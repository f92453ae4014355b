//! Tabulated quadrature nodes and weights. Values match the reference
//! 8-point Gauss-Legendre rule on `[-1, 1]`, a 9-point symmetric rule on
//! the unit triangle, and the 7-point Gauss log-singular rule of Crow
//! (1993) for `integral_0^1 f(x) log(x) dx`.

use crate::constants::{N_LOG_QUAD_2D, N_QUAD_2D, N_TRIANGLE_QUAD};

pub const GAUSS_QUAD_POINTS: [f64; N_QUAD_2D] = [
    -0.1834346424956498,
    0.1834346424956498,
    -0.5255324099163290,
    0.5255324099163290,
    -0.7966664774136267,
    0.7966664774136267,
    -0.9602898564975363,
    0.9602898564975363,
];

pub const GAUSS_QUAD_WEIGHTS: [f64; N_QUAD_2D] = [
    0.3626837833783620,
    0.3626837833783620,
    0.3137066458778873,
    0.3137066458778873,
    0.2223810344533745,
    0.2223810344533745,
    0.1012285362903763,
    0.1012285362903763,
];

pub const TRIANGLE_QUAD_B1: [f64; N_TRIANGLE_QUAD] = [
    0.124949503233232,
    0.437525248383384,
    0.437525248383384,
    0.797112651860071,
    0.797112651860071,
    0.165409927389841,
    0.165409927389841,
    0.037477420750088,
    0.037477420750088,
];

pub const TRIANGLE_QUAD_B2: [f64; N_TRIANGLE_QUAD] = [
    0.437525248383384,
    0.124949503233232,
    0.437525248383384,
    0.165409927389841,
    0.037477420750088,
    0.797112651860071,
    0.037477420750088,
    0.797112651860071,
    0.165409927389841,
];

pub const TRIANGLE_QUAD_WEIGHTS: [f64; N_TRIANGLE_QUAD] = [
    0.205950504760887,
    0.205950504760887,
    0.205950504760887,
    0.063691414286223,
    0.063691414286223,
    0.063691414286223,
    0.063691414286223,
    0.063691414286223,
    0.063691414286223,
];

/// John A. Crow, "Quadrature of Integrands with a Logarithmic Singularity", 1993.
pub const GAUSS_LOG_QUAD_POINTS: [f64; N_LOG_QUAD_2D] = [
    0.175965211846577428056264284949e-2,
    0.244696507125133674276453373497e-1,
    0.106748056858788954180259781083,
    0.275807641295917383077859512057,
    0.517855142151833716158668961982,
    0.771815485362384900274646869494,
    0.952841340581090558994306588503,
];

pub const GAUSS_LOG_QUAD_WEIGHTS: [f64; N_LOG_QUAD_2D] = [
    0.663266631902570511783904989051e-2,
    0.457997079784753341255767348120e-1,
    0.123840208071318194550489564922,
    0.212101926023811930107914875456,
    0.261390645672007725646580606859,
    0.231636180290909384318815526104,
    0.118598665644451726132783641957,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gauss_weights_sum_to_two() {
        assert_relative_eq!(GAUSS_QUAD_WEIGHTS.iter().sum::<f64>(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_weights_sum_to_one() {
        assert_relative_eq!(TRIANGLE_QUAD_WEIGHTS.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }
}
