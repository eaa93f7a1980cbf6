//! Error Types
//!
//! This module defines the error types used throughout the editor core.
//!
//! # Overview
//!
//! Most editor operations are infallible by design: unknown object ids are
//! treated as "already removed" and silently ignored. [`EditorError`] covers
//! the places where the caller hands in data that has to be validated first:
//! - Keyframe data that does not form a valid clip
//! - Color strings and settings files coming from outside the core
//! - Explicit lookups through [`ObjectRegistry::try_get`](crate::scene::ObjectRegistry::try_get)
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyframe_studio::errors::Result;
//! use keyframe_studio::scene::Color;
//!
//! fn parse_swatch(hex: &str) -> Result<Color> {
//!     Color::from_hex(hex)
//! }
//! ```

use thiserror::Error;

use crate::scene::ObjectId;

/// The main error type for the editor core.
#[derive(Error, Debug)]
pub enum EditorError {
    // ========================================================================
    // Registry Errors
    // ========================================================================
    /// The requested object is not (or no longer) in the registry.
    #[error("Object not found: {0:?}")]
    ObjectNotFound(ObjectId),

    // ========================================================================
    // Animation Data Errors
    // ========================================================================
    /// Keyframes handed to a clip constructor violate the clip invariant.
    #[error("Invalid keyframe clip: {0}")]
    InvalidClip(String),

    // ========================================================================
    // Input Parsing Errors
    // ========================================================================
    /// A color string is not of the form `#rrggbb`.
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    /// Settings values are out of range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, EditorError>`.
pub type Result<T> = std::result::Result<T, EditorError>;
