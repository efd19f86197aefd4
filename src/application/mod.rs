//! # Application Layer
//!
//! The client seam to the generative endpoint and the three use cases built
//! on top of it: appraisal, name generation, and keyword extraction.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
