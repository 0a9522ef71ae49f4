use crate::constants::MAX_ORIGIN_LENGTH;
use crate::util::{base_host, normalize_lower};
use url::{Host, Url};

/// A request `Origin` header value broken into its scheme, host and port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateOrigin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl CandidateOrigin {
    /// Parses a serialized origin. Returns `None` for anything that is not a
    /// plain `scheme://host[:port]`, including the opaque `null` origin.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty()
            || value.len() > MAX_ORIGIN_LENGTH
            || value.eq_ignore_ascii_case("null")
            || value.bytes().any(|byte| byte.is_ascii_control() || byte == b' ')
        {
            return None;
        }

        let url = Url::parse(value).ok()?;
        if url.cannot_be_a_base()
            || !url.username().is_empty()
            || url.password().is_some()
            || url.query().is_some()
            || url.fragment().is_some()
            || !matches!(url.path(), "" | "/")
        {
            return None;
        }

        let host = match url.host()? {
            Host::Domain("") => return None,
            Host::Domain(domain) => normalize_lower(domain),
            Host::Ipv4(address) => address.to_string(),
            Host::Ipv6(address) => format!("[{address}]"),
        };

        Some(Self {
            scheme: url.scheme().to_owned(),
            host,
            port: url.port_or_known_default(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Host with a single leading `www.` label removed.
    pub fn base_host(&self) -> &str {
        base_host(&self.host)
    }

    /// Explicit port, or the scheme's default when it has one.
    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
