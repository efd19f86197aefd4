pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    AppraiseDomainUseCase, ExtractDomainsUseCase, GenerateNamesUseCase, GenerativeClient,
};

pub use connector::{GeminiClient, MockGenerativeClient};

pub use domain::{
    AppraisalResult, AvailabilityStatus, ComparableSale, DomainError, ExtractedDomains,
    GeneratedDomain, GenerationRequest, KeyFactor, LengthPreference, ModelRequest, Schema,
    TldGroup, EXTRACTION_TLDS,
};
