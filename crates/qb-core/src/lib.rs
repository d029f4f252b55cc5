//! # qb-core
//!
//! Core types and error definitions shared across the quantbench
//! workspace: type aliases, the error enum, and the `ensure!` /
//! `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// Alias used for array sizes / counts.
pub type Size = usize;
