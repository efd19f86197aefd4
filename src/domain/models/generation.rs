use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Desired length band for generated names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPreference {
    Any,
    Short,
    Medium,
    Long,
}

impl LengthPreference {
    /// Extra prompt sentence pinning the model to the band, or `None` when
    /// any length is acceptable.
    pub fn prompt_instruction(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Short => Some("The domain name length should be short (4-6 characters)."),
            Self::Medium => Some("The domain name length should be medium (7-12 characters)."),
            Self::Long => Some("The domain name length should be long (13 characters or more)."),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

impl Default for LengthPreference {
    fn default() -> Self {
        Self::Any
    }
}

impl FromStr for LengthPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(Self::Any),
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(format!(
                "unknown length preference '{other}' (expected any, short, medium, long)"
            )),
        }
    }
}

impl fmt::Display for LengthPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The model's guess at whether a suggested name is still registrable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    #[serde(rename = "Likely Available")]
    LikelyAvailable,
    #[serde(rename = "Maybe Taken")]
    MaybeTaken,
    #[serde(rename = "Likely Taken")]
    LikelyTaken,
}

impl AvailabilityStatus {
    /// Map a wire label to a status. The upstream schema constrains `status`
    /// to a string but not to the three labels, so anything else comes back
    /// as `None` and is handled by the caller rather than crashing.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim() {
            "Likely Available" => Some(Self::LikelyAvailable),
            "Maybe Taken" => Some(Self::MaybeTaken),
            "Likely Taken" => Some(Self::LikelyTaken),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::LikelyAvailable => "Likely Available",
            Self::MaybeTaken => "Maybe Taken",
            Self::LikelyTaken => "Likely Taken",
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One suggested name with its estimated availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDomain {
    name: String,
    status: AvailabilityStatus,
}

impl GeneratedDomain {
    pub fn new(name: impl Into<String>, status: AvailabilityStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> AvailabilityStatus {
        self.status
    }
}

/// Parameters for one name-generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    keyword: String,
    tlds: Vec<String>,
    length: LengthPreference,
}

impl GenerationRequest {
    pub fn new(keyword: impl Into<String>, tlds: Vec<String>) -> Self {
        Self {
            keyword: keyword.into(),
            tlds,
            length: LengthPreference::default(),
        }
    }

    pub fn with_length(mut self, length: LengthPreference) -> Self {
        self.length = length;
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn tlds(&self) -> &[String] {
        &self.tlds
    }

    pub fn length(&self) -> LengthPreference {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_labels() {
        assert_eq!(
            AvailabilityStatus::parse("Likely Available"),
            Some(AvailabilityStatus::LikelyAvailable)
        );
        assert_eq!(
            AvailabilityStatus::parse("  Maybe Taken "),
            Some(AvailabilityStatus::MaybeTaken)
        );
        assert_eq!(
            AvailabilityStatus::parse("Likely Taken"),
            Some(AvailabilityStatus::LikelyTaken)
        );
    }

    #[test]
    fn status_rejects_unknown_label() {
        assert_eq!(AvailabilityStatus::parse("Unknown"), None);
        assert_eq!(AvailabilityStatus::parse(""), None);
        assert_eq!(AvailabilityStatus::parse("likely available"), None);
    }

    #[test]
    fn status_serializes_to_wire_label() {
        let json = serde_json::to_string(&AvailabilityStatus::LikelyAvailable).unwrap();
        assert_eq!(json, "\"Likely Available\"");
    }

    #[test]
    fn length_preference_round_trips_from_str() {
        for label in ["any", "short", "medium", "long"] {
            let parsed: LengthPreference = label.parse().unwrap();
            assert_eq!(parsed.as_str(), label);
        }
        assert!("tiny".parse::<LengthPreference>().is_err());
    }

    #[test]
    fn only_any_omits_prompt_instruction() {
        assert!(LengthPreference::Any.prompt_instruction().is_none());
        assert!(LengthPreference::Short
            .prompt_instruction()
            .unwrap()
            .contains("4-6"));
    }

    #[test]
    fn generation_request_builder() {
        let request = GenerationRequest::new("coffee", vec![".com".into(), ".io".into()])
            .with_length(LengthPreference::Short);
        assert_eq!(request.keyword(), "coffee");
        assert_eq!(request.tlds().len(), 2);
        assert_eq!(request.length(), LengthPreference::Short);
    }
}
