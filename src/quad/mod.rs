//! Fixed-order quadrature rules: 8-point Gauss-Legendre on a line, a
//! 9-point symmetric triangle rule, a 7-point Gauss log-singular rule
//! (Crow 1993), and the closed-form Legendre polynomials P0..P8 used to
//! build the nodal basis for self-panel integration.

mod legendre;
mod rules;

pub use legendre::{legendre, legendre_coefficient};
pub use rules::{
    GAUSS_LOG_QUAD_POINTS, GAUSS_LOG_QUAD_WEIGHTS, GAUSS_QUAD_POINTS, GAUSS_QUAD_WEIGHTS,
    TRIANGLE_QUAD_B1, TRIANGLE_QUAD_B2, TRIANGLE_QUAD_WEIGHTS,
};
