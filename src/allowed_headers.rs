use crate::util::{is_http_token, split_list};

/// Request headers advertised in `Access-Control-Allow-Headers` when a
/// preflight does not list its own.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(from = "Vec<String>"))]
pub struct AllowedHeaders(Vec<String>);

impl AllowedHeaders {
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

impl From<Vec<String>> for AllowedHeaders {
    fn from(values: Vec<String>) -> Self {
        Self::list(values)
    }
}

/// Header names from an `Access-Control-Request-Headers` value that are safe
/// to reflect. Entries that are not HTTP tokens are dropped.
pub(crate) fn mirror_request_headers(requested: &str) -> Vec<String> {
    dedupe_ignore_case(
        split_list(requested)
            .filter(|name| is_http_token(name))
            .map(str::to_owned),
    )
}

pub(crate) fn dedupe_ignore_case<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut deduped: Vec<String> = Vec::new();
    for value in values {
        if value.is_empty()
            || deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&value))
        {
            continue;
        }
        deduped.push(value);
    }
    deduped
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
