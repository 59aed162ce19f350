//! Mathematical utilities: dense linear solves for the mixing fit.

pub mod solve;

pub use solve::*;
