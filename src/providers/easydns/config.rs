use std::fmt;

use serde::{Deserialize, Serialize};

/// Production endpoint used when no `api_url` is configured.
pub const DEFAULT_API_URL: &str = "https://rest.easydns.net";
pub const SANDBOX_API_URL: &str = "https://sandbox.rest.easydns.net";

/// Credentials and endpoint handed to the easyDNS client.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EasyDnsProvider {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_token: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub api_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ApiToken,
    ApiKey,
    ApiUrl,
}

impl Field {
    /// Fields that must be non-empty once a block has been parsed.
    pub const REQUIRED: [Field; 2] = [Field::ApiToken, Field::ApiKey];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "api_token" => Some(Field::ApiToken),
            "api_key" => Some(Field::ApiKey),
            "api_url" => Some(Field::ApiUrl),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::ApiToken => "api_token",
            Field::ApiKey => "api_key",
            Field::ApiUrl => "api_url",
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::ApiToken => "API token",
            Field::ApiKey => "API key",
            Field::ApiUrl => "API url",
        }
    }
}

impl EasyDnsProvider {
    pub fn new(api_token: &str, api_key: &str) -> Self {
        Self {
            api_token: api_token.to_string(),
            api_key: api_key.to_string(),
            api_url: String::new(),
        }
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.to_string();
        self
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ApiToken => &self.api_token,
            Field::ApiKey => &self.api_key,
            Field::ApiUrl => &self.api_url,
        }
    }

    pub(crate) fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ApiToken => &mut self.api_token,
            Field::ApiKey => &mut self.api_key,
            Field::ApiUrl => &mut self.api_url,
        }
    }
}

// Secrets never show up in logs.
impl fmt::Debug for EasyDnsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasyDnsProvider")
            .field("api_token", &mask(&self.api_token))
            .field("api_key", &mask(&self.api_key))
            .field("api_url", &self.api_url)
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "***" }
}
