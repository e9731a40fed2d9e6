//! Integer-only kernels: saturating primitives, vector ops, activations, projections.
pub mod fixed;
pub mod vector;
pub mod activation;
mod tables;
pub mod matvec;
pub mod normalize;

pub use fixed::{QValue, Iter, Scale, Q15, Q31, Q63, Q7};
pub use matvec::{MatVecScales, Projection, ProjectionScales};
