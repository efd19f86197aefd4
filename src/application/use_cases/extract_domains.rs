use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::GenerativeClient;
use crate::domain::{
    parse_payload, DomainError, ExtractedDomains, ModelRequest, Schema, EXTRACTION_TLDS,
};

/// Enumerates plausible domains containing a keyword, grouped by the fixed
/// TLD set. No key is required in the declared schema, so a TLD the model
/// skipped normalizes to an empty group rather than an error.
pub struct ExtractDomainsUseCase {
    client: Arc<dyn GenerativeClient>,
}

impl ExtractDomainsUseCase {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    fn response_schema() -> Schema {
        Schema::object(
            EXTRACTION_TLDS
                .iter()
                .map(|tld| (*tld, Schema::array(Schema::String)))
                .collect(),
            &[],
        )
    }

    fn build_prompt(keyword: &str) -> String {
        format!(
            "You are a domain research tool. Based on the keyword '{keyword}', extract and \
             list all plausible domain names that contain this keyword. Group them by their \
             Top-Level Domain (TLD), including {}. For each TLD, provide at least 5-10 \
             examples if possible. Respond ONLY with a valid JSON object matching the \
             provided schema, where keys are the TLDs (e.g., '.com') and values are arrays \
             of domain name strings.",
            EXTRACTION_TLDS.join(", ")
        )
    }

    pub async fn execute(&self, keyword: &str) -> Result<ExtractedDomains, DomainError> {
        if keyword.trim().is_empty() {
            return Err(DomainError::invalid_input("keyword must not be empty"));
        }

        let request = ModelRequest::new(Self::build_prompt(keyword), Self::response_schema());
        let text = self.client.generate(&request).await?;
        debug!("extraction raw payload ({} bytes)", text.len());

        let value = parse_payload(&text)?;
        request.response_schema().validate(&value)?;

        if let Some(object) = value.as_object() {
            for key in object.keys() {
                if !EXTRACTION_TLDS.contains(&key.as_str()) {
                    warn!("dropping extraction group for unrecognized TLD '{key}'");
                }
            }
        }

        Ok(ExtractedDomains::from_value(&value))
    }
}
