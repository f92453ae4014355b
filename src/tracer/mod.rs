//! Adaptive particle tracing: integrate the Lorentz equation for a charged
//! particle through a field evaluator, stopping when the trajectory leaves
//! a caller-supplied bounding box or fills its output block.

mod integrator;
mod wrappers;

pub use integrator::{trace_particle, TracerOptions};
pub use wrappers::{
    trace_particle_3d, trace_particle_3d_derivs, trace_particle_radial, trace_particle_radial_derivs,
};
