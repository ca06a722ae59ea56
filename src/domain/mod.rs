//! Domain layer: reel configuration, pay rules, wagers and outcomes.
//!
//! Nothing in here performs I/O or draws random numbers; randomness enters
//! through the [`ports::RandomSource`] port.

pub mod bet;
pub mod outcome;
pub mod paytable;
pub mod ports;
pub mod sequence;
pub mod symbol;
pub mod variation;
