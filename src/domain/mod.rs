//! # Domain Layer
//!
//! Value records exchanged at the model boundary, the response-schema
//! descriptor, and the failure taxonomy. Independent of transport and UI.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
