use super::Schema;

/// A single schema-constrained call to the generative endpoint.
///
/// Holds everything the transport needs: the user prompt, an optional system
/// instruction, the declared output shape, and a sampling temperature.
/// Requests are built once per operation and never reused.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    prompt: String,
    system_instruction: Option<String>,
    response_schema: Schema,
    temperature: Option<f32>,
}

impl ModelRequest {
    pub fn new(prompt: impl Into<String>, response_schema: Schema) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            response_schema,
            temperature: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn system_instruction(&self) -> Option<&str> {
        self.system_instruction.as_deref()
    }

    pub fn response_schema(&self) -> &Schema {
        &self.response_schema
    }

    pub fn temperature(&self) -> Option<f32> {
        self.temperature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_optional_fields() {
        let request = ModelRequest::new("appraise example.com", Schema::String)
            .with_system_instruction("You are an appraiser.")
            .with_temperature(0.2);

        assert_eq!(request.prompt(), "appraise example.com");
        assert_eq!(request.system_instruction(), Some("You are an appraiser."));
        assert_eq!(request.temperature(), Some(0.2));
    }

    #[test]
    fn defaults_leave_optional_fields_unset() {
        let request = ModelRequest::new("anything", Schema::Number);
        assert!(request.system_instruction().is_none());
        assert!(request.temperature().is_none());
    }
}
