//! On-axis derivative expansions: the ring-potential derivative recurrence
//! (radial symmetry) and the Fourier-radial coefficient table (full 3D).
//! These are the building blocks `field::radial`/`field::three_d`'s
//! expansion-based evaluators interpolate between.

pub mod fourier3d;
pub mod radial;

pub use fourier3d::axial_coefficients_3d;
pub use radial::axial_derivatives_radial_ring;
