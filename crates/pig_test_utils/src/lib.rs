//! # Pig Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Loaded dice that replay scripted faces
//! - Player fixtures
//! - Frequency statistics for randomness checks
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod loaded_die;
pub mod stats;
pub mod strategies;

pub use loaded_die::LoadedDie;

/// Re-export proptest for convenience.
pub use proptest;
