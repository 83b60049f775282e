//! Core sampling logic.
//!
//! - `sampler`: the interval loop that turns cumulative interface counters
//!   into per-tick sent/received deltas

pub mod sampler;
