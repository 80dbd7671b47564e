//! Foreign arithmetic backends

pub mod ffi;
