//! # u-toolkit
//!
//! Small generic helpers for everyday Rust code.
//!
//! This crate collects the utility functions that tend to get rewritten in
//! every project: deduplicating inserts, set algebra over slices, map
//! merging, clamping, reservoir sampling and identifier case conversion.
//! It knows nothing about any consumer domain.
//!
//! ## Modules
//!
//! - [`collections`] — sequence and map helpers, [`collections::ListMap`]
//! - [`numeric`] — `Number` bounds, clamp, lazy ternary
//! - [`random`] — bounded integers, choose, reservoir sampling, shuffle
//! - [`case`] — camelCase / PascalCase / snake_case
//! - [`error`] — precondition violations for the `try_` operations
//!
//! ## Design Philosophy
//!
//! - **Fail fast**: operations with unsatisfiable inputs panic with a
//!   descriptive message; `try_` variants return [`PreconditionError`]
//! - **Explicit randomness**: samplers take the RNG as an argument
//! - **Property-based testing**: invariants verified via proptest

pub mod case;
pub mod collections;
pub mod error;
pub mod numeric;
pub mod random;

pub use error::PreconditionError;
