//! Mixture search.
//!
//! Responsibilities:
//!
//! - enumerate candidate combinations in a fixed order (`combinations`)
//! - fit constrained mass fractions per combination (`fitter`)
//! - apply nonnegativity and tolerance rules (`evaluator`)
//! - drive the whole search and stream results to a sink (`search`, `sink`)

pub mod combinations;
pub mod evaluator;
pub mod fitter;
pub mod search;
pub mod sink;

pub use combinations::*;
pub use evaluator::*;
pub use fitter::*;
pub use search::*;
pub use sink::*;
