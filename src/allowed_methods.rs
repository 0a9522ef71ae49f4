use crate::constants::method;

/// Methods advertised in `Access-Control-Allow-Methods` when a request does
/// not name one through a preflight.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(from = "Vec<String>"))]
pub struct AllowedMethods(Vec<String>);

impl AllowedMethods {
    /// Builds the list, trimming entries and dropping exact duplicates.
    /// Methods are case-sensitive, so `get` and `GET` are kept apart.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if !trimmed.is_empty() && !deduped.contains(&trimmed) {
                deduped.push(trimmed);
            }
        }
        Self(deduped)
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::PUT,
            method::PATCH,
            method::POST,
            method::DELETE,
        ])
    }
}

impl From<Vec<String>> for AllowedMethods {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
