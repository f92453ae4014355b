//! # traceon-core -- boundary-element charged-particle optics
//!
//! Numerical core of a charged-particle optics toolkit: singular-kernel
//! quadrature over axisymmetric and full-3D boundary elements, dense
//! boundary-element matrix assembly for voltage and dielectric-interface
//! conditions, field synthesis either directly from panel charges or from
//! precomputed on-axis derivative expansions, and an adaptive
//! Runge-Kutta-Fehlberg particle tracer.
//!
//! ## Quick start
//!
//! ```
//! use traceon_core::prelude::*;
//! use glam::DVec2;
//!
//! // K(0.5), E(0.5): standard reference values for the Cody approximant.
//! let k = ellipk(0.5).unwrap();
//! let e = ellipe(0.5).unwrap();
//! assert!((k - 1.8540746773).abs() < 1e-9);
//! assert!((e - 1.3506438810).abs() < 1e-9);
//! ```
//!
//! ## Architecture
//!
//! - [`elliptic`] -- K(m), E(m)
//! - [`kernel`] -- ring and 3D point-charge potential kernels
//! - [`quad`] -- quadrature rules and Legendre polynomials
//! - [`axial`] -- on-axis derivative expansions
//! - [`field`] -- potential/field evaluators, direct and expansion-based
//! - [`matrix`] -- dense boundary-element matrix assembly
//! - [`tracer`] -- adaptive particle tracing
//! - [`intersect`] -- trajectory/plane intersection
//! - [`util`] -- shared geometric primitives
//! - [`constants`] -- compile-time sizes and the tracer's physical constant
//! - [`error`] -- the crate's typed error surface

const _: () = assert!(std::mem::size_of::<f64>() == 8);

pub mod axial;
pub mod constants;
pub mod elliptic;
pub mod error;
pub mod field;
pub mod intersect;
pub mod kernel;
pub mod matrix;
pub mod quad;
pub mod tracer;
pub mod util;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::constants::*;
    pub use crate::elliptic::{ellipe, ellipk};
    pub use crate::error::CoreError;
    pub use crate::kernel::{Kernel, Point3dKernel, RingKernel};
    pub use crate::matrix::{fill_matrix_3d, fill_matrix_radial, ExcitationKind};
    pub use crate::tracer::{
        trace_particle, trace_particle_3d, trace_particle_3d_derivs, trace_particle_radial,
        trace_particle_radial_derivs, TracerOptions,
    };
    pub use crate::util::{Segment, Triangle};
}
