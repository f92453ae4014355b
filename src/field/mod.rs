//! Potential and field evaluators: direct panel sums, and expansion-based
//! evaluators that interpolate the axial-derivative tables built by
//! [`crate::axial`].

pub mod radial;
pub mod three_d;
