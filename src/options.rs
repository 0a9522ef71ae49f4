use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::env;
use crate::exposed_headers::ExposedHeaders;
use crate::pattern::PatternError;
use crate::util::{is_http_token, split_list};
use thiserror::Error;

/// Startup configuration for [`crate::Cors`].
///
/// `trusted_origins` is an ordered list of patterns; see
/// [`crate::TrustedOriginPattern`] for the accepted forms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default, deny_unknown_fields))]
pub struct CorsOptions {
    pub trusted_origins: Vec<String>,
    pub credentials: bool,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub max_age: Option<u64>,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            trusted_origins: Vec::new(),
            credentials: false,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            max_age: None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("trusted origin `{pattern}` is invalid: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name `{0}` is not a valid HTTP token")]
    InvalidHeader(String),
}

impl CorsOptions {
    /// Reads `CORS_TRUSTED_ORIGINS` (comma-separated) and
    /// `CORS_ALLOW_CREDENTIALS` from the process environment. Unset variables
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let trusted_origins = lookup(env::TRUSTED_ORIGINS)
            .map(|value| split_list(&value).map(str::to_owned).collect())
            .unwrap_or_default();
        let credentials = lookup(env::ALLOW_CREDENTIALS)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        Self {
            trusted_origins,
            credentials,
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if let Some(method) = self
            .methods
            .values()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(name) = self
            .allowed_headers
            .values()
            .iter()
            .chain(self.exposed_headers.values())
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeader(name.clone()));
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
