//! The immutable table of known variants.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::{ConfigError, Result};
use crate::validation::check_required_fields;
use crate::variant::{VariantConfig, VariantRecord};

/// Name of the variant used when nothing else is configured.
pub const DEFAULT_VARIANT_NAME: &str = "public";

/// Ordered, name-keyed collection of variant records.
///
/// Built once and never mutated afterwards, so it can be shared freely
/// between threads.
///
/// # Example
///
/// ```
/// use vary_config::VariantRegistry;
///
/// let registry = VariantRegistry::builtin();
/// assert!(registry.find_by_name("mock").unwrap().config.use_mock_server);
/// assert!(registry.find_by_name("Mock").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRegistry {
    variants: IndexMap<String, VariantRecord>,
}

impl VariantRegistry {
    /// Build a registry from records, rejecting duplicate names and records
    /// with empty fields.
    pub fn new(records: impl IntoIterator<Item = VariantRecord>) -> Result<Self> {
        let mut variants = IndexMap::new();

        for record in records {
            check_required_fields(&record)?;

            match variants.entry(record.name.clone()) {
                Entry::Occupied(entry) => {
                    return Err(ConfigError::DuplicateVariant(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }

        tracing::debug!(count = variants.len(), "built variant registry");
        Ok(Self { variants })
    }

    /// The built-in variant table.
    pub fn builtin() -> Self {
        Self {
            variants: builtin_records()
                .into_iter()
                .map(|record| (record.name.clone(), record))
                .collect(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&VariantRecord> {
        self.variants.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    /// Variant names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariantRecord> {
        self.variants.values()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a VariantRegistry {
    type Item = &'a VariantRecord;
    type IntoIter = indexmap::map::Values<'a, String, VariantRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.values()
    }
}

fn builtin_records() -> Vec<VariantRecord> {
    let stable = |api_base_url: &str, use_mock_server: bool| VariantConfig {
        api_base_url: api_base_url.to_string(),
        auth_audience: "http://stable-example.com/api".to_string(),
        auth_client_id: "A92H...".to_string(),
        auth_domain: "your-account.us.auth0.com".to_string(),
        use_mock_server,
    };
    let feature = |use_mock_server: bool| VariantConfig {
        api_base_url: "https://api-feature-branch.example.com".to_string(),
        auth_audience: "http://experimental-example.com/api".to_string(),
        auth_client_id: "B93I...".to_string(),
        auth_domain: "your-feature-account.us.auth0.com".to_string(),
        use_mock_server,
    };

    vec![
        // Production build; named "public" to keep it apart from NODE_ENV.
        VariantRecord::new(DEFAULT_VARIANT_NAME, stable("https://api.example.com", false)),
        // The mock server answers every request, so the API host is never reached.
        VariantRecord::new("mock", stable("https://api-does-not-exist.example.com", true)),
        VariantRecord::new("my_new_feature_local", feature(true)),
        VariantRecord::new("my_new_feature", feature(false)),
    ]
}
