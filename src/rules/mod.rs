//! Game outcome rules.
//!
//! The final comparison is a pure function of the two players'
//! automation points. There is no tie-break beyond strict inequality.

pub mod outcome;

pub use outcome::GameResult;
