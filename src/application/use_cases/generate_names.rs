use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::GenerativeClient;
use crate::domain::{
    parse_payload, AvailabilityStatus, DomainError, GeneratedDomain, GenerationRequest,
    ModelRequest, Schema,
};

/// Hard cap on returned suggestions; the prompt asks for 10-15 and anything
/// beyond that is truncated.
const MAX_SUGGESTIONS: usize = 15;

/// Wire record before the status label is checked against the enum.
#[derive(Deserialize)]
struct RawSuggestion {
    name: String,
    status: String,
}

/// Generates brandable domain name candidates for a keyword, restricted to a
/// TLD set and length band, each tagged with an estimated availability.
///
/// The upstream schema constrains `status` to a string only; entries whose
/// label is not one of the three known values are dropped with a warning
/// instead of being passed through or crashing the caller.
pub struct GenerateNamesUseCase {
    client: Arc<dyn GenerativeClient>,
}

impl GenerateNamesUseCase {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    fn response_schema() -> Schema {
        Schema::array(Schema::object(
            vec![("name", Schema::String), ("status", Schema::String)],
            &["name", "status"],
        ))
    }

    fn build_prompt(request: &GenerationRequest) -> String {
        let mut prompt = format!(
            "You are an AI domain name expert. Generate a list of 10-15 creative, brandable, \
             and catchy domain name ideas based on the keyword '{}'.\n",
            request.keyword()
        );
        if let Some(instruction) = request.length().prompt_instruction() {
            prompt.push_str(instruction);
            prompt.push('\n');
        }
        prompt.push_str(&format!(
            "Only use the following Top-Level Domains (TLDs): {}.\n",
            request.tlds().join(", ")
        ));
        prompt.push_str(
            "For each domain name, estimate its availability and provide a status. The status \
             must be one of the following three options: 'Likely Available', 'Maybe Taken', or \
             'Likely Taken'. Base your estimation on factors like keyword popularity, length, \
             and common naming patterns.\n\
             Do not suggest domains that are obviously premium or taken by major brands. Focus \
             on creative and available options.\n\
             Respond ONLY with a valid JSON array of objects matching the provided schema.",
        );
        prompt
    }

    pub async fn execute(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<GeneratedDomain>, DomainError> {
        if request.keyword().trim().is_empty() {
            return Err(DomainError::invalid_input("keyword must not be empty"));
        }
        if request.tlds().is_empty() {
            return Err(DomainError::invalid_input(
                "at least one TLD must be selected",
            ));
        }

        let model_request = ModelRequest::new(Self::build_prompt(request), Self::response_schema());
        let text = self.client.generate(&model_request).await?;
        debug!("generation raw payload ({} bytes)", text.len());

        let value = parse_payload(&text)?;
        model_request.response_schema().validate(&value)?;

        let raw: Vec<RawSuggestion> = serde_json::from_value(value)
            .map_err(|e| DomainError::schema(format!("payload does not match suggestion shape: {e}")))?;

        let suggestions: Vec<GeneratedDomain> = raw
            .into_iter()
            .filter_map(|entry| match AvailabilityStatus::parse(&entry.status) {
                Some(status) => Some(GeneratedDomain::new(entry.name, status)),
                None => {
                    warn!(
                        "dropping suggestion '{}' with unrecognized status '{}'",
                        entry.name, entry.status
                    );
                    None
                }
            })
            .take(MAX_SUGGESTIONS)
            .collect();

        Ok(suggestions)
    }
}
