//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the library:
//! - Math types and scalar operations
//! - Logging utilities

pub mod math;
pub mod logging;
