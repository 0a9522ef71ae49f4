use crate::decision::OriginStatus;
use crate::options::ValidationError;
use crate::origin::CandidateOrigin;
use crate::pattern::TrustedOriginPattern;
use tracing::{debug, warn};

/// Ordered, immutable set of trusted-origin patterns.
///
/// Built once at startup and shared by reference with every request. The
/// first matching pattern admits an origin; order never changes the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedOrigins {
    patterns: Vec<TrustedOriginPattern>,
}

impl TrustedOrigins {
    /// Parses every pattern, failing on the first invalid one.
    pub fn parse<I, S>(patterns: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                TrustedOriginPattern::parse(pattern).map_err(|source| {
                    ValidationError::InvalidPattern {
                        pattern: pattern.to_owned(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Parses every pattern, skipping invalid ones. A skipped pattern never
    /// matches anything.
    pub fn parse_lenient<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .filter_map(|pattern| {
                let pattern = pattern.as_ref();
                match TrustedOriginPattern::parse(pattern) {
                    Ok(parsed) => Some(parsed),
                    Err(error) => {
                        warn!(pattern, %error, "ignoring invalid trusted origin pattern");
                        None
                    }
                }
            })
            .collect();

        Self { patterns }
    }

    pub fn is_trusted(&self, candidate: &str) -> bool {
        self.classify(candidate) == OriginStatus::Trusted
    }

    /// Classifies a present `Origin` header value. Never returns
    /// [`OriginStatus::NotApplicable`]; absence is decided by the caller.
    pub fn classify(&self, candidate: &str) -> OriginStatus {
        let Some(origin) = CandidateOrigin::parse(candidate) else {
            return OriginStatus::Malformed;
        };

        match self.matching_pattern(&origin) {
            Some(pattern) => {
                debug!(origin = candidate, %pattern, "origin matched trusted pattern");
                OriginStatus::Trusted
            }
            None => OriginStatus::Untrusted,
        }
    }

    pub fn matching_pattern(&self, origin: &CandidateOrigin) -> Option<&TrustedOriginPattern> {
        self.patterns.iter().find(|pattern| pattern.matches(origin))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrustedOriginPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl FromIterator<TrustedOriginPattern> for TrustedOrigins {
    fn from_iter<I: IntoIterator<Item = TrustedOriginPattern>>(iter: I) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TrustedOrigins {
    type Item = &'a TrustedOriginPattern;
    type IntoIter = std::slice::Iter<'a, TrustedOriginPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

/// Reports whether `candidate` matches any of `patterns`.
///
/// Total over all inputs: an empty, malformed or opaque candidate is never
/// trusted, and patterns that fail to parse are skipped.
///
/// Patterns are parsed on every call. Services checking each request should
/// build a [`TrustedOrigins`] once with [`TrustedOrigins::parse`] or
/// [`TrustedOrigins::parse_lenient`] instead.
pub fn is_origin_trusted<S: AsRef<str>>(candidate: &str, patterns: &[S]) -> bool {
    let Some(origin) = CandidateOrigin::parse(candidate) else {
        return false;
    };

    patterns.iter().any(|pattern| {
        let pattern = pattern.as_ref();
        match TrustedOriginPattern::parse(pattern) {
            Ok(parsed) => parsed.matches(&origin),
            Err(error) => {
                debug!(pattern, %error, "ignoring invalid trusted origin pattern");
                false
            }
        }
    })
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
