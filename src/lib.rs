//! Bridge Configuration Library
//!
//! Typed, layered configuration for the test bridge, built from flat string
//! property overrides on top of compiled-in defaults.

pub mod cli;
pub mod config;
pub mod error;
