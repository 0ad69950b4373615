//! Solving of quadratic equations over optional integer coefficients.
//!
//! The solver is a pure function over one equation record. It keeps
//! no shared state, which lets any number of worker threads call it
//! concurrently without coordination. Malformed input is not an
//! error: it produces an ordinary [`Solution`] that renders as
//! `invalid input`.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod solution;
pub use solution::{Roots, Solution};

mod solve;
pub use solve::solve;

/// Raw coefficient tokens for a single equation, as grouped from the
/// flat input list. A short final group carries `None` padding.
pub type Equation = [Option<String>; 3];

/// Parsed coefficients. `None` marks a token that was missing or not
/// a valid signed 64-bit integer.
pub type Coefficients = [Option<i64>; 3];
