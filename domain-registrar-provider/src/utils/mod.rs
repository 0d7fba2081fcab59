//! Utility modules.

/// Date/time serialization helpers shared by the data model and clients.
pub mod datetime;

/// Log sanitization utilities to prevent contact and credential exposure.
pub mod log_sanitizer;
