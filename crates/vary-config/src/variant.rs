//! Variant records: one named set of build-time values per deployment target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name of the compile-time constant holding the API base URL.
pub const API_BASE_URL: &str = "API_BASE_URL";
pub const AUTH_AUDIENCE: &str = "AUTH_AUDIENCE";
pub const AUTH_CLIENT_ID: &str = "AUTH_CLIENT_ID";
pub const AUTH_DOMAIN: &str = "AUTH_DOMAIN";

/// A named build variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VariantRecord {
    /// Unique, case-sensitive identifier (e.g. "public", "mock")
    pub name: String,

    /// Values embedded into the build for this variant
    #[serde(alias = "buildConfig")]
    pub config: VariantConfig,
}

/// Build-time values carried by every variant. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VariantConfig {
    /// Base URL of the backend API
    pub api_base_url: String,

    /// Audience identifier requested from the auth provider
    pub auth_audience: String,

    /// OAuth client id
    pub auth_client_id: String,

    /// Auth provider hostname
    pub auth_domain: String,

    /// Prepend the mock server bootstrap to the entry points
    pub use_mock_server: bool,
}

impl VariantRecord {
    pub fn new(name: impl Into<String>, config: VariantConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }
}

impl VariantConfig {
    /// String fields keyed by the constant they are embedded as.
    ///
    /// The order here is the order constants are emitted in.
    pub fn constant_sources(&self) -> [(&'static str, &str); 4] {
        [
            (API_BASE_URL, self.api_base_url.as_str()),
            (AUTH_AUDIENCE, self.auth_audience.as_str()),
            (AUTH_CLIENT_ID, self.auth_client_id.as_str()),
            (AUTH_DOMAIN, self.auth_domain.as_str()),
        ]
    }

    /// String fields keyed by their serialized field name.
    pub(crate) fn string_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("apiBaseUrl", self.api_base_url.as_str()),
            ("authAudience", self.auth_audience.as_str()),
            ("authClientId", self.auth_client_id.as_str()),
            ("authDomain", self.auth_domain.as_str()),
        ]
    }
}
