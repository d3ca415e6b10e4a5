//! Common types and utilities for the php2js translator.
//!
//! This crate provides foundational types used across all php2js crates:
//! - Source spans (`Span`)
//! - Line/column locations (`LineMap`, `Location`)
//! - Translator limits and thresholds

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Location};

// Centralized limits and thresholds
pub mod limits;
