//! # hl7gen Bench
//!
//! Benchmark fixtures for hl7gen compiler performance testing.

pub mod fixtures;
