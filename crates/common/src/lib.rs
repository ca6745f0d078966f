//! Common utilities used across the stowage codebase.
//!
//! This crate provides shared functionality for the stowage toolkit, such as
//! filesystem helpers and the worker pool used to process compilation units.

/// General utility functions and types for common tasks.
pub mod utils;
