mod appraisal;
mod extraction;
mod generation;
mod request;
mod schema;

pub use appraisal::*;
pub use extraction::*;
pub use generation::*;
pub use request::*;
pub use schema::*;
