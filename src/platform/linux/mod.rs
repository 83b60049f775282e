//! Linux platform implementations.
//!
//! Uses /proc/net/dev for per-interface byte counters.

pub mod network;
