use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rand::Rng;
use rand::SeedableRng;
use serde_json::json;
use tracing::debug;

use crate::application::GenerativeClient;
use crate::domain::{DomainError, ModelRequest, Schema, EXTRACTION_TLDS};

const STATUS_LABELS: [&str; 3] = ["Likely Available", "Maybe Taken", "Likely Taken"];
const FACTOR_NAMES: [&str; 4] = ["Keyword Strength", "Length", "Brandability", "TLD"];
const NAME_STEMS: [&str; 6] = ["nova", "peak", "zen", "flux", "echo", "mint"];

/// A [`GenerativeClient`] that never touches the network.
///
/// Two modes. Scripted: queued payloads (or failures) are returned in order,
/// for driving the parse/validate pipeline in tests. Synthetic: with an empty
/// queue, a payload matching the request's declared schema is fabricated
/// deterministically; the prompt is hashed into an RNG seed, so the same
/// input always yields the same "appraisal". Lets the CLI run end-to-end
/// without a credential.
pub struct MockGenerativeClient {
    scripted: Mutex<VecDeque<Result<String, DomainError>>>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            scripted: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Queue a raw payload to return on the next call.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.scripted
            .lock()
            .expect("scripted queue poisoned")
            .push_back(Ok(text.into()));
        self
    }

    /// Queue a failure to return on the next call.
    pub fn with_failure(self, error: DomainError) -> Self {
        self.scripted
            .lock()
            .expect("scripted queue poisoned")
            .push_back(Err(error));
        self
    }

    /// How many times `generate` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The prompt of the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt
            .lock()
            .expect("last prompt poisoned")
            .clone()
    }

    fn seed_for(prompt: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        hasher.finish()
    }

    fn synthesize(request: &ModelRequest) -> String {
        let mut rng = rand::rngs::StdRng::seed_from_u64(Self::seed_for(request.prompt()));

        let value = match request.response_schema() {
            Schema::Object { properties, .. }
                if properties.iter().any(|(name, _)| name == "estimatedValue") =>
            {
                Self::synthetic_appraisal(&mut rng)
            }
            Schema::Array { .. } => Self::synthetic_suggestions(&mut rng),
            _ => Self::synthetic_extraction(&mut rng),
        };

        value.to_string()
    }

    fn synthetic_name(rng: &mut impl Rng, tld: &str) -> String {
        let stem = NAME_STEMS[rng.gen_range(0..NAME_STEMS.len())];
        let other = NAME_STEMS[rng.gen_range(0..NAME_STEMS.len())];
        format!("{stem}{other}{tld}")
    }

    fn synthetic_appraisal(rng: &mut impl Rng) -> serde_json::Value {
        let estimated = (rng.gen_range(50..500) * 10) as f64;
        let factors: Vec<_> = FACTOR_NAMES
            .iter()
            .map(|factor| {
                json!({
                    "factor": factor,
                    "score": rng.gen_range(1..=10) as f64,
                    "analysis": format!("Synthetic {} assessment.", factor.to_lowercase()),
                })
            })
            .collect();
        let sales: Vec<_> = (0..3)
            .map(|_| {
                json!({
                    "domain": Self::synthetic_name(rng, ".com"),
                    "price": (rng.gen_range(10..300) * 10) as f64,
                })
            })
            .collect();
        let similar: Vec<_> = (0..3).map(|_| Self::synthetic_name(rng, ".net")).collect();

        json!({
            "estimatedValue": estimated,
            "valueRange": format!("${:.0} - ${:.0}", estimated * 0.8, estimated * 1.2),
            "explanation": "Synthetic appraisal generated offline for demonstration purposes.",
            "keyFactors": factors,
            "comparableSales": sales,
            "similarAvailableDomains": similar,
        })
    }

    fn synthetic_suggestions(rng: &mut impl Rng) -> serde_json::Value {
        let entries: Vec<_> = (0..12)
            .map(|_| {
                json!({
                    "name": Self::synthetic_name(rng, ".com"),
                    "status": STATUS_LABELS[rng.gen_range(0..STATUS_LABELS.len())],
                })
            })
            .collect();
        json!(entries)
    }

    fn synthetic_extraction(rng: &mut impl Rng) -> serde_json::Value {
        let mut groups = serde_json::Map::new();
        for tld in EXTRACTION_TLDS {
            let domains: Vec<_> = (0..5).map(|_| Self::synthetic_name(rng, tld)).collect();
            groups.insert(tld.to_string(), json!(domains));
        }
        serde_json::Value::Object(groups)
    }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(&self, request: &ModelRequest) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().expect("last prompt poisoned") =
            Some(request.prompt().to_string());

        let scripted = self
            .scripted
            .lock()
            .expect("scripted queue poisoned")
            .pop_front();

        match scripted {
            Some(result) => result,
            None => {
                let payload = Self::synthesize(request);
                debug!("synthesized mock payload ({} bytes)", payload.len());
                Ok(payload)
            }
        }
    }
}
