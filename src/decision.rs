use crate::constants::header;
use crate::header_builder::HeaderBuilder;
use crate::headers::{HeaderCollection, Headers};
use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::warn;

/// How the request's `Origin` header was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OriginStatus {
    /// No `Origin` header: not a CORS request, no headers are emitted.
    NotApplicable,
    Trusted,
    /// Parsed cleanly but matched no pattern.
    Untrusted,
    /// Unparsable `Origin` value. Handled exactly like [`Self::Untrusted`].
    Malformed,
}

impl OriginStatus {
    /// `true` for trusted origins and for requests CORS does not apply to.
    pub fn is_trusted(self) -> bool {
        matches!(self, Self::NotApplicable | Self::Trusted)
    }
}

/// Per-request CORS outcome.
///
/// A router must reject the request before it reaches application logic
/// when [`CorsDecision::should_reject`] is `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsDecision {
    pub(crate) status: OriginStatus,
    pub(crate) allow_origin: Option<String>,
    pub(crate) allow_credentials: bool,
    pub(crate) allow_methods: Vec<String>,
    pub(crate) allow_headers: Vec<String>,
    pub(crate) expose_headers: Vec<String>,
    pub(crate) max_age: Option<u64>,
    pub(crate) preflight: bool,
}

impl CorsDecision {
    pub(crate) fn not_applicable() -> Self {
        Self::denied(OriginStatus::NotApplicable, false)
    }

    pub(crate) fn denied(status: OriginStatus, preflight: bool) -> Self {
        Self {
            status,
            allow_origin: None,
            allow_credentials: false,
            allow_methods: Vec::new(),
            allow_headers: Vec::new(),
            expose_headers: Vec::new(),
            max_age: None,
            preflight,
        }
    }

    pub fn status(&self) -> OriginStatus {
        self.status
    }

    pub fn is_trusted(&self) -> bool {
        self.status.is_trusted()
    }

    pub fn is_applicable(&self) -> bool {
        self.status != OriginStatus::NotApplicable
    }

    pub fn should_reject(&self) -> bool {
        !self.status.is_trusted()
    }

    pub fn is_preflight(&self) -> bool {
        self.preflight
    }

    /// The literal request origin to reflect, present only when trusted.
    pub fn allow_origin(&self) -> Option<&str> {
        self.allow_origin.as_deref()
    }

    pub fn allow_credentials(&self) -> bool {
        self.allow_credentials
    }

    pub fn allow_methods(&self) -> &[String] {
        &self.allow_methods
    }

    pub fn allow_headers(&self) -> &[String] {
        &self.allow_headers
    }

    pub fn expose_headers(&self) -> &[String] {
        &self.expose_headers
    }

    pub fn max_age(&self) -> Option<u64> {
        self.max_age
    }

    /// Response headers for this decision, in emission order.
    pub fn headers(&self) -> Headers {
        HeaderBuilder::new(self).build()
    }

    /// Writes [`Self::headers`] onto a response header map. Any `Vary` value
    /// already present is merged rather than replaced.
    pub fn write_headers(&self, map: &mut HeaderMap) {
        for (name, value) in self.headers() {
            if name.eq_ignore_ascii_case(header::VARY) {
                merge_vary(map, &value);
                continue;
            }

            match (
                HeaderName::try_from(name.as_str()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    map.insert(name, value);
                }
                _ => warn!(header = %name, "skipping CORS header with an unrepresentable value"),
            }
        }
    }
}

fn merge_vary(map: &mut HeaderMap, value: &str) {
    let mut merged = HeaderCollection::with_estimate(1);
    for existing in map.get_all(http::header::VARY) {
        if let Ok(existing) = existing.to_str() {
            merged.add_vary(existing);
        }
    }
    merged.add_vary(value);

    if let Some(combined) = merged.into_headers().swap_remove(header::VARY)
        && let Ok(combined) = HeaderValue::from_str(&combined)
    {
        map.insert(http::header::VARY, combined);
    }
}

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;
