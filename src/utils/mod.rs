//! Utility Module
//!
//! - [`Timer`]: wall-clock frame timing for headless or custom frame loops

pub mod time;

pub use time::Timer;
