//! macOS platform implementations.
//!
//! Uses netstat -ib for per-interface byte counters.

pub mod network;
