//! Typed error surface for the crate's API boundary.
//!
//! The original C backend treats most domain violations as fatal --
//! `printf` a message and `exit(1)`. This port reports the same conditions
//! as a recoverable [`CoreError`] instead, since no process owns the call
//! boundary the way a standalone executable would.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("non-finite value encountered in {context}")]
    NonFinite { context: &'static str },

    #[error("elliptic integral argument m = {m} is not < 1")]
    EllipticDomain { m: f64 },

    #[error("legendre polynomial order {order} exceeds the maximum of {max}", max = crate::constants::LEGENDRE_MAX_ORDER)]
    LegendreOrder { order: usize },

    #[error("unrecognized excitation tag {tag}")]
    UnknownExcitation { tag: u8 },

    #[error("segment endpoints coincide; cannot compute a normal")]
    ZeroLengthSegment,

    #[error("triangle vertices are collinear or coincident; zero area")]
    DegenerateTriangle,

    #[error("buffer length {actual} does not match expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
}
