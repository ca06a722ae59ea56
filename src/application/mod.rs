//! Application layer: the payout engine and the round simulator built on it.
//!
//! `PayoutEngine` owns one session's randomness and evaluates spins against a
//! shared, read-only `ReelConfiguration`.

pub mod engine;
pub mod simulator;
