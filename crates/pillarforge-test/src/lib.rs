//! Shared test fixtures for PillarForge crates.
//!
//! This crate provides data types and pure functions for testing.
//!
//! - [`schedule`] - Shift scheduling data types and descriptors
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! pillarforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use pillarforge_test::schedule::{Schedule, shift_descriptor};
//! ```

pub mod schedule;

// Re-export commonly used types at crate root for convenience
pub use schedule::{Schedule, Shift};
