//! Constants shared by the benchmark and validation harness

pub mod harness;
