//! Compile-time constants shared by every module: the tracer's physical
//! constant, axis-singularity guards, and the fixed sizes of every
//! quadrature and expansion table in the crate.

/// Electron charge-to-mass ratio, in units where time is nanoseconds and
/// length is millimeters. Scales the right-hand side of the Lorentz
/// equation in the tracer.
pub const EM: f64 = -0.1758820022723908;

/// Distance from the axis of symmetry below which radial-kernel
/// derivatives short-circuit to avoid stepping into the 1/r singularity.
pub const EPS_AXIS: f64 = 1e-10;

/// Number of on-axis derivatives tabulated per ring element (D0..D8).
pub const DERIV_MAX: usize = 9;

/// Number of radial powers (nu) kept in the 3D Fourier-radial expansion.
pub const NU_MAX: usize = 4;

/// Number of azimuthal modes (m) kept in the 3D Fourier-radial expansion.
pub const M_MAX: usize = 8;

/// Number of Gauss-Legendre nodes used along a line panel, and the width
/// of the per-panel nodal charge basis.
pub const N_QUAD_2D: usize = 8;

/// Number of nodes in the symmetric triangle quadrature rule.
pub const N_TRIANGLE_QUAD: usize = 9;

/// Number of nodes in the Gauss log-singular quadrature rule.
pub const N_LOG_QUAD_2D: usize = 7;

/// Highest Legendre order the self-panel quadrature expands against.
/// Requesting an order at or above this is a domain error, not a panic.
pub const LEGENDRE_MAX_ORDER: usize = 8;

/// Fixed size of a tracer output block; `trace_particle_*` stops (not an
/// error) once this many samples have been written.
pub const TRACING_BLOCK_SIZE: usize = 100_000;
