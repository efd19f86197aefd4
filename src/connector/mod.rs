//! # Connector Layer
//!
//! External integrations implementing the application seam:
//! - Gemini generateContent transport over HTTP
//! - Deterministic mock client for tests and offline runs

pub mod adapter;

pub use adapter::*;
