//! Chemistry primitives: the periodic table and formula mass profiles.
//!
//! Implemented as small, pure functions so that the input reader can stay
//! focused on syntax.

pub mod elements;
pub mod formula;

pub use elements::*;
pub use formula::*;
