//! Top-level commands

pub mod sync;
