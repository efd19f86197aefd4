use serde_json::{json, Map, Value};

use crate::domain::DomainError;

/// Data-driven description of the JSON shape the model is asked to produce.
///
/// A single descriptor value serves two purposes: it is serialized into the
/// `responseSchema` field of the upstream request, and it drives local
/// validation of the payload that comes back. Only the primitives the
/// generateContent API understands are modeled (object, array, string,
/// number, integer).
#[derive(Debug, Clone)]
pub enum Schema {
    Object {
        properties: Vec<(String, Schema)>,
        required: Vec<String>,
    },
    Array {
        items: Box<Schema>,
    },
    String,
    Number,
    Integer,
}

impl Schema {
    pub fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        Self::Object {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required: required.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
        }
    }

    /// Render the descriptor in the wire format the generateContent API
    /// expects (`type` in upper case, nested `properties`/`items`).
    pub fn to_value(&self) -> Value {
        match self {
            Self::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert(name.clone(), schema.to_value());
                }
                let mut value = json!({
                    "type": "OBJECT",
                    "properties": Value::Object(props),
                });
                if !required.is_empty() {
                    value["required"] = json!(required);
                }
                value
            }
            Self::Array { items } => json!({
                "type": "ARRAY",
                "items": items.to_value(),
            }),
            Self::String => json!({ "type": "STRING" }),
            Self::Number => json!({ "type": "NUMBER" }),
            Self::Integer => json!({ "type": "INTEGER" }),
        }
    }

    /// Check a parsed payload against this descriptor.
    ///
    /// Required keys must be present and non-null; keys the descriptor does
    /// not know about are ignored (the model is free to add extras). Any
    /// violation is a [`DomainError::SchemaError`] naming the offending path.
    pub fn validate(&self, value: &Value) -> Result<(), DomainError> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), DomainError> {
        match self {
            Self::Object {
                properties,
                required,
            } => {
                let object = value.as_object().ok_or_else(|| {
                    DomainError::schema(format!("{path}: expected an object"))
                })?;

                for key in required {
                    match object.get(key) {
                        Some(v) if !v.is_null() => {}
                        _ => {
                            return Err(DomainError::schema(format!(
                                "{path}: missing required field '{key}'"
                            )))
                        }
                    }
                }

                for (name, schema) in properties {
                    if let Some(v) = object.get(name) {
                        if !v.is_null() {
                            schema.validate_at(v, &format!("{path}.{name}"))?;
                        }
                    }
                }
                Ok(())
            }
            Self::Array { items } => {
                let array = value.as_array().ok_or_else(|| {
                    DomainError::schema(format!("{path}: expected an array"))
                })?;
                for (i, element) in array.iter().enumerate() {
                    items.validate_at(element, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            Self::String => {
                if value.is_string() {
                    Ok(())
                } else {
                    Err(DomainError::schema(format!("{path}: expected a string")))
                }
            }
            Self::Number => {
                if value.is_number() {
                    Ok(())
                } else {
                    Err(DomainError::schema(format!("{path}: expected a number")))
                }
            }
            Self::Integer => {
                if value.is_i64() || value.is_u64() {
                    Ok(())
                } else {
                    Err(DomainError::schema(format!("{path}: expected an integer")))
                }
            }
        }
    }
}

/// Parse the raw text returned by the model into a JSON value.
///
/// The model is instructed to return nothing but JSON, though payloads arrive
/// with surrounding whitespace. Anything that does not parse (prose,
/// truncated output, code fences) is a [`DomainError::ParseError`].
pub fn parse_payload(text: &str) -> Result<Value, DomainError> {
    serde_json::from_str(text.trim())
        .map_err(|e| DomainError::parse(format!("payload is not valid JSON: {e}")))
}
