use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// One scored valuation criterion (length, brandability, TLD, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyFactor {
    factor: String,
    score: f64,
    analysis: String,
}

impl KeyFactor {
    pub fn new(factor: impl Into<String>, score: f64, analysis: impl Into<String>) -> Self {
        Self {
            factor: factor.into(),
            score,
            analysis: analysis.into(),
        }
    }

    pub fn factor(&self) -> &str {
        &self.factor
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn analysis(&self) -> &str {
        &self.analysis
    }
}

/// A past sale of a similar domain, used as pricing evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparableSale {
    domain: String,
    price: f64,
}

impl ComparableSale {
    pub fn new(domain: impl Into<String>, price: f64) -> Self {
        Self {
            domain: domain.into(),
            price,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// The model's full valuation of a single domain name.
///
/// `domain_name` is not part of the upstream payload; the appraisal use case
/// stamps the requested domain onto the result before returning it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppraisalResult {
    #[serde(default)]
    domain_name: String,
    estimated_value: f64,
    value_range: String,
    explanation: String,
    key_factors: Vec<KeyFactor>,
    comparable_sales: Vec<ComparableSale>,
    similar_available_domains: Vec<String>,
}

impl AppraisalResult {
    pub fn for_domain(mut self, domain_name: impl Into<String>) -> Self {
        self.domain_name = domain_name.into();
        self
    }

    pub fn domain_name(&self) -> &str {
        &self.domain_name
    }

    pub fn estimated_value(&self) -> f64 {
        self.estimated_value
    }

    pub fn value_range(&self) -> &str {
        &self.value_range
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn key_factors(&self) -> &[KeyFactor] {
        &self.key_factors
    }

    pub fn comparable_sales(&self) -> &[ComparableSale] {
        &self.comparable_sales
    }

    pub fn similar_available_domains(&self) -> &[String] {
        &self.similar_available_domains
    }

    /// Range checks the declared schema cannot express: the estimate and all
    /// sale prices are non-negative, factor scores lie in [1, 10].
    pub fn check_ranges(&self) -> Result<(), DomainError> {
        if !self.estimated_value.is_finite() || self.estimated_value < 0.0 {
            return Err(DomainError::schema(format!(
                "estimatedValue must be a non-negative number, got {}",
                self.estimated_value
            )));
        }

        for factor in &self.key_factors {
            if !(1.0..=10.0).contains(&factor.score) {
                return Err(DomainError::schema(format!(
                    "keyFactors score for '{}' out of range [1, 10]: {}",
                    factor.factor, factor.score
                )));
            }
        }

        for sale in &self.comparable_sales {
            if !sale.price.is_finite() || sale.price < 0.0 {
                return Err(DomainError::schema(format!(
                    "comparableSales price for '{}' must be non-negative, got {}",
                    sale.domain, sale.price
                )));
            }
        }

        Ok(())
    }
}
