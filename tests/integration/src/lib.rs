//! Integration test utilities for the hourboard API
//!
//! Spawns the API on a local port with the in-process store and drives it
//! over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
