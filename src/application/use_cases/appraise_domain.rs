use std::sync::Arc;

use tracing::debug;

use crate::application::GenerativeClient;
use crate::domain::{parse_payload, AppraisalResult, DomainError, ModelRequest, Schema};

/// System instruction fixing the valuation task and its criteria.
const SYSTEM_INSTRUCTION: &str = "\
You are an expert domain name appraiser. Your task is to provide a comprehensive \
and realistic valuation for a given domain name. Your analysis must be based on \
established industry criteria such as keyword relevance, length, TLD extension \
(.com is highest value), brandability, memorability, and commercial potential. \
Provide your response in the requested JSON format.";

/// Low temperature to favor consistent valuations over creative ones.
const APPRAISAL_TEMPERATURE: f32 = 0.2;

/// Appraises a single domain name through the generative model.
///
/// One stateless round trip: build a schema-constrained request, await the
/// text payload, parse it as JSON, validate shape and ranges, return the
/// typed result. Failures are classified, never retried.
pub struct AppraiseDomainUseCase {
    client: Arc<dyn GenerativeClient>,
}

impl AppraiseDomainUseCase {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Declared output shape, sent upstream and reused to validate the reply.
    fn response_schema() -> Schema {
        let key_factor = Schema::object(
            vec![
                ("factor", Schema::String),
                ("score", Schema::Number),
                ("analysis", Schema::String),
            ],
            &["factor", "score", "analysis"],
        );
        let comparable_sale = Schema::object(
            vec![("domain", Schema::String), ("price", Schema::Number)],
            &["domain", "price"],
        );

        Schema::object(
            vec![
                ("estimatedValue", Schema::Number),
                ("valueRange", Schema::String),
                ("explanation", Schema::String),
                ("keyFactors", Schema::array(key_factor)),
                ("comparableSales", Schema::array(comparable_sale)),
                ("similarAvailableDomains", Schema::array(Schema::String)),
            ],
            &[
                "estimatedValue",
                "valueRange",
                "explanation",
                "keyFactors",
                "comparableSales",
                "similarAvailableDomains",
            ],
        )
    }

    fn build_request(domain_name: &str) -> ModelRequest {
        ModelRequest::new(
            format!("Please provide a detailed appraisal for the domain name: \"{domain_name}\""),
            Self::response_schema(),
        )
        .with_system_instruction(SYSTEM_INSTRUCTION)
        .with_temperature(APPRAISAL_TEMPERATURE)
    }

    /// Appraise `domain_name`. The caller trims and normalizes the input;
    /// this method performs no trimming and rejects blank input outright.
    pub async fn execute(&self, domain_name: &str) -> Result<AppraisalResult, DomainError> {
        if domain_name.trim().is_empty() {
            return Err(DomainError::invalid_input("domain name must not be empty"));
        }

        let request = Self::build_request(domain_name);
        let text = self.client.generate(&request).await?;
        debug!("appraisal raw payload ({} bytes)", text.len());

        let value = parse_payload(&text)?;
        request.response_schema().validate(&value)?;

        let result: AppraisalResult = serde_json::from_value(value)
            .map_err(|e| DomainError::schema(format!("payload does not match appraisal shape: {e}")))?;
        result.check_ranges()?;

        Ok(result.for_domain(domain_name))
    }
}
