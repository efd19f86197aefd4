mod appraise_domain;
mod extract_domains;
mod generate_names;

pub use appraise_domain::*;
pub use extract_domains::*;
pub use generate_names::*;
