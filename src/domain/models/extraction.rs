use serde::Serialize;
use serde_json::Value;

/// The fixed TLD set extraction works over, in canonical display order.
pub const EXTRACTION_TLDS: [&str; 5] = [".com", ".net", ".org", ".io", ".ai"];

/// Domains found for one TLD.
#[derive(Debug, Clone, Serialize)]
pub struct TldGroup {
    tld: String,
    domains: Vec<String>,
}

impl TldGroup {
    pub fn new(tld: impl Into<String>, domains: Vec<String>) -> Self {
        Self {
            tld: tld.into(),
            domains,
        }
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Extraction results grouped by TLD.
///
/// Always carries one group per entry of [`EXTRACTION_TLDS`], in that order.
/// A TLD the model said nothing about is an empty group, so callers never
/// distinguish "key absent" from "key present with no domains".
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDomains {
    groups: Vec<TldGroup>,
}

impl ExtractedDomains {
    /// Normalize a validated payload into the canonical group list. Keys
    /// outside the fixed TLD set and non-string array entries are dropped.
    pub fn from_value(value: &Value) -> Self {
        let groups = EXTRACTION_TLDS
            .iter()
            .map(|tld| {
                let domains = value
                    .get(tld)
                    .and_then(Value::as_array)
                    .map(|entries| {
                        entries
                            .iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                TldGroup::new(*tld, domains)
            })
            .collect();

        Self { groups }
    }

    pub fn groups(&self) -> &[TldGroup] {
        &self.groups
    }

    pub fn get(&self, tld: &str) -> &[String] {
        self.groups
            .iter()
            .find(|g| g.tld() == tld)
            .map(TldGroup::domains)
            .unwrap_or(&[])
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.domains().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(TldGroup::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_tld_becomes_empty_group() {
        let extracted = ExtractedDomains::from_value(&json!({
            ".com": ["coffeehub.com", "coffeelab.com"]
        }));

        assert_eq!(extracted.groups().len(), EXTRACTION_TLDS.len());
        assert_eq!(extracted.get(".com").len(), 2);
        assert!(extracted.get(".ai").is_empty());
        assert_eq!(extracted.total(), 2);
    }

    #[test]
    fn missing_key_equals_empty_array() {
        let absent = ExtractedDomains::from_value(&json!({ ".com": ["a.com"] }));
        let empty = ExtractedDomains::from_value(&json!({ ".com": ["a.com"], ".net": [] }));
        assert_eq!(absent.get(".net"), empty.get(".net"));
    }

    #[test]
    fn unknown_keys_are_dropped() {
        let extracted = ExtractedDomains::from_value(&json!({
            ".dev": ["coffee.dev"],
            ".io": ["coffee.io"]
        }));

        assert_eq!(extracted.get(".io").len(), 1);
        assert!(extracted.groups().iter().all(|g| g.tld() != ".dev"));
    }

    #[test]
    fn groups_keep_canonical_order() {
        let extracted = ExtractedDomains::from_value(&json!({
            ".ai": ["x.ai"],
            ".com": ["x.com"]
        }));
        let order: Vec<&str> = extracted.groups().iter().map(TldGroup::tld).collect();
        assert_eq!(order, EXTRACTION_TLDS);
    }

    #[test]
    fn non_string_entries_are_skipped() {
        let extracted = ExtractedDomains::from_value(&json!({
            ".com": ["good.com", 42, null]
        }));
        assert_eq!(extracted.get(".com"), ["good.com"]);
    }
}
