//! Configuration management
//!
//! [`Configuration`] is the validated, immutable input of the client: API key,
//! loaded signing key, target environment and the JWT claim tunables.
//! [`ClientSettings`] is the file/environment layer it can be built from.

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::auth::RsaSigningKey;
use crate::urls;
use crate::{Error, Result};

/// Default lifetime of the signed client assertion
pub const DEFAULT_TOKEN_EXPIRATION_MINUTES: u32 = 10;

/// Default `iss` claim of the client assertion
pub const DEFAULT_ISSUER_NAME: &str = "TikkieAPI Rust";

/// Target environment of the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox (test) environment
    Sandbox,
    /// Production environment
    #[default]
    Production,
}

impl Environment {
    /// Map a "use test environment" flag to an environment
    #[must_use]
    pub fn from_test_flag(use_test_environment: bool) -> Self {
        if use_test_environment {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    /// Base URL every resource suffix is appended to
    #[must_use]
    pub fn api_base_url(self) -> &'static str {
        match self {
            Self::Sandbox => urls::SANDBOX_API_BASE_URL,
            Self::Production => urls::PRODUCTION_API_BASE_URL,
        }
    }

    /// Token URL, used as the JWT audience
    #[must_use]
    pub fn oauth_token_url(self) -> &'static str {
        match self {
            Self::Sandbox => urls::SANDBOX_OAUTH_TOKEN_URL,
            Self::Production => urls::PRODUCTION_OAUTH_TOKEN_URL,
        }
    }
}

/// Validated client configuration
#[derive(Debug, Clone)]
pub struct Configuration {
    api_key: String,
    signing_key: RsaSigningKey,
    environment: Environment,
    token_expiration_minutes: u32,
    issuer_name: String,
}

impl Configuration {
    /// Build a configuration, loading the RSA private key from a PEM file.
    ///
    /// Fails with [`Error::InvalidArgument`] for an empty API key, and with
    /// [`Error::FileNotFound`] / [`Error::InvalidKeyData`] when the key cannot
    /// be loaded.
    pub fn new(
        api_key: impl Into<String>,
        private_key_path: impl AsRef<Path>,
        use_test_environment: bool,
    ) -> Result<Self> {
        let api_key = validate_api_key(api_key.into())?;
        let signing_key = RsaSigningKey::from_pem_file(private_key_path)?;
        Self::with_signing_key(
            api_key,
            signing_key,
            Environment::from_test_flag(use_test_environment),
        )
    }

    /// Build a configuration from an already loaded key
    pub fn with_signing_key(
        api_key: impl Into<String>,
        signing_key: RsaSigningKey,
        environment: Environment,
    ) -> Result<Self> {
        Ok(Self {
            api_key: validate_api_key(api_key.into())?,
            signing_key,
            environment,
            token_expiration_minutes: DEFAULT_TOKEN_EXPIRATION_MINUTES,
            issuer_name: DEFAULT_ISSUER_NAME.to_string(),
        })
    }

    /// Override the client assertion lifetime
    #[must_use]
    pub fn with_token_expiration_minutes(mut self, minutes: u32) -> Self {
        self.token_expiration_minutes = minutes;
        self
    }

    /// Override the `iss` claim
    #[must_use]
    pub fn with_issuer_name(mut self, issuer_name: impl Into<String>) -> Self {
        self.issuer_name = issuer_name.into();
        self
    }

    /// API key sent in the `API-Key` header and as the `sub` claim
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Key used to sign client assertions
    pub fn signing_key(&self) -> &RsaSigningKey {
        &self.signing_key
    }

    /// Target environment
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// True for the sandbox environment
    pub fn is_test_environment(&self) -> bool {
        self.environment == Environment::Sandbox
    }

    /// API base URL of the configured environment
    pub fn api_base_url(&self) -> &'static str {
        self.environment.api_base_url()
    }

    /// OAuth token URL of the configured environment
    pub fn oauth_token_url(&self) -> &'static str {
        self.environment.oauth_token_url()
    }

    /// Client assertion lifetime in minutes
    pub fn token_expiration_minutes(&self) -> u32 {
        self.token_expiration_minutes
    }

    /// `iss` claim of client assertions
    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }
}

fn validate_api_key(api_key: String) -> Result<String> {
    if api_key.trim().is_empty() {
        return Err(Error::invalid_argument("api key must not be empty"));
    }
    Ok(api_key)
}

/// Client settings loaded from a YAML file and `TIKKIE_*` environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// API key (`TIKKIE_API_KEY`)
    pub api_key: Option<String>,
    /// Path of the PEM-encoded RSA private key (`TIKKIE_PRIVATE_KEY_PATH`)
    pub private_key_path: Option<PathBuf>,
    /// Target environment (`TIKKIE_ENVIRONMENT=sandbox|production`)
    pub environment: Environment,
    /// Client assertion lifetime in minutes
    pub token_expiration_minutes: u32,
    /// `iss` claim of client assertions
    pub issuer_name: String,
    /// Per-request timeout in seconds; unset keeps the transport default
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            private_key_path: None,
            environment: Environment::default(),
            token_expiration_minutes: DEFAULT_TOKEN_EXPIRATION_MINUTES,
            issuer_name: DEFAULT_ISSUER_NAME.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ClientSettings {
    /// Load settings from an optional file, then environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(p) = path {
            if !p.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            figment = figment.merge(Yaml::file(p));
        }

        figment = figment.merge(Env::prefixed("TIKKIE_"));

        figment.extract().map_err(|e| Error::Config(e.to_string()))
    }

    /// Request timeout, if configured
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the settings and load the signing key
    pub fn into_configuration(self) -> Result<Configuration> {
        let api_key = self
            .api_key
            .ok_or_else(|| Error::invalid_argument("api key is not configured"))?;
        let path = self
            .private_key_path
            .ok_or_else(|| Error::invalid_argument("private key path is not configured"))?;

        let api_key = validate_api_key(api_key)?;
        let signing_key = RsaSigningKey::from_pem_file(&path)?;

        Ok(Configuration::with_signing_key(api_key, signing_key, self.environment)?
            .with_token_expiration_minutes(self.token_expiration_minutes)
            .with_issuer_name(self.issuer_name))
    }
}
