use crate::allowed_headers::dedupe_ignore_case;

/// Response headers listed in `Access-Control-Expose-Headers` on trusted
/// actual (non-preflight) responses.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(from = "Vec<String>"))]
pub struct ExposedHeaders(Vec<String>);

impl ExposedHeaders {
    /// Builds the list from the provided iterator, trimming whitespace and
    /// removing duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(dedupe_ignore_case(
            values.into_iter().map(|value| value.into().trim().to_string()),
        ))
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for ExposedHeaders {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
