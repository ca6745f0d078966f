//! The Core module serves as the integration point for stowage's functionality.
//!
//! This module re-exports the public interfaces of the tool-specific crates, making it easier
//! to use stowage's capabilities in other projects.

/// Error types for the core module
pub mod error;

// Re-export all tool-specific modules
pub use stowage_layout;
