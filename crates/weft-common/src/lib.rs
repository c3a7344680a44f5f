//! Common types and utilities for the weft introspection core.
//!
//! This crate provides foundational types used across all weft crates:
//! - String interning (`Atom`, `Interner`)
//! - Centralized limits and thresholds

// String interning for name deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;
