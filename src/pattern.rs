use crate::constants::WILDCARD_PREFIX;
use crate::origin::CandidateOrigin;
use crate::util::{base_host, is_host_label_char, normalize_lower};
use std::fmt;
use thiserror::Error;
use url::Host;

/// A configured trusted-origin entry, parsed once when the policy is built.
///
/// Exact and bare hosts are stored lower-cased and in their base form (a
/// single leading `www.` label removed), so `example.com` and
/// `www.example.com` are the same pattern. Wildcard roots are never reduced:
/// `*.www.example.com` covers `www.example.com` and names below it only. Both names are assumed to be operated by the same party; the
/// `www.` label is treated as cosmetic rather than as a security boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrustedOriginPattern {
    /// `https://example.com[:port]`: scheme and host must match.
    Exact {
        scheme: String,
        host: String,
        port: Option<u16>,
    },
    /// `[scheme://]*.example.com[:port]`: the root or any subdomain of it.
    WildcardSubdomain {
        scheme: Option<String>,
        root: String,
        port: Option<u16>,
    },
    /// `example.com[:port]`: any scheme.
    BareHost { host: String, port: Option<u16> },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("origin pattern is empty")]
    Empty,
    #[error("a bare `*` would trust every origin; list origins or use `*.<domain>`")]
    BareWildcard,
    #[error("invalid scheme `{0}` in origin pattern")]
    InvalidScheme(String),
    #[error("invalid host `{0}` in origin pattern")]
    InvalidHost(String),
    #[error("invalid port `{0}` in origin pattern")]
    InvalidPort(String),
    #[error("origin patterns may only contain a scheme, a host and a port")]
    UnexpectedComponent,
}

impl TrustedOriginPattern {
    pub fn parse(input: &str) -> Result<Self, PatternError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PatternError::Empty);
        }
        if trimmed == "*" {
            return Err(PatternError::BareWildcard);
        }

        let lowered = normalize_lower(trimmed);
        let (scheme, rest) = match lowered.split_once("://") {
            Some((scheme, rest)) => (Some(parse_scheme(scheme)?), rest),
            None => (None, lowered.as_str()),
        };

        let authority = rest.strip_suffix('/').unwrap_or(rest);
        if authority.contains(['/', '?', '#', '@']) {
            return Err(PatternError::UnexpectedComponent);
        }

        let (wildcard, authority) = match authority.strip_prefix(WILDCARD_PREFIX) {
            Some(remainder) => (true, remainder),
            None => (false, authority),
        };

        let (host, port) = split_host_port(authority)?;
        let host = parse_host(host, wildcard)?;

        Ok(match (wildcard, scheme) {
            (true, scheme) => Self::WildcardSubdomain {
                scheme,
                root: host,
                port,
            },
            (false, Some(scheme)) => Self::Exact { scheme, host, port },
            (false, None) => Self::BareHost { host, port },
        })
    }

    pub fn matches(&self, candidate: &CandidateOrigin) -> bool {
        match self {
            Self::Exact { scheme, host, port } => {
                candidate.scheme() == scheme
                    && candidate.base_host() == host
                    && port_matches(*port, candidate)
            }
            Self::WildcardSubdomain { scheme, root, port } => {
                scheme
                    .as_deref()
                    .is_none_or(|scheme| candidate.scheme() == scheme)
                    && is_within_root(candidate.host(), root)
                    && port_matches(*port, candidate)
            }
            Self::BareHost { host, port } => {
                candidate.base_host() == host && port_matches(*port, candidate)
            }
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::WildcardSubdomain { .. })
    }

    pub fn port(&self) -> Option<u16> {
        match self {
            Self::Exact { port, .. }
            | Self::WildcardSubdomain { port, .. }
            | Self::BareHost { port, .. } => *port,
        }
    }
}

impl fmt::Display for TrustedOriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact { scheme, host, .. } => write!(f, "{scheme}://{host}")?,
            Self::WildcardSubdomain { scheme, root, .. } => {
                if let Some(scheme) = scheme {
                    write!(f, "{scheme}://")?;
                }
                write!(f, "{WILDCARD_PREFIX}{root}")?;
            }
            Self::BareHost { host, .. } => f.write_str(host)?,
        }
        match self.port() {
            Some(port) => write!(f, ":{port}"),
            None => Ok(()),
        }
    }
}

impl std::str::FromStr for TrustedOriginPattern {
    type Err = PatternError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

fn parse_scheme(scheme: &str) -> Result<String, PatternError> {
    let mut bytes = scheme.bytes();
    let valid = bytes.next().is_some_and(|first| first.is_ascii_alphabetic())
        && bytes.all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.'));
    if valid {
        Ok(scheme.to_owned())
    } else {
        Err(PatternError::InvalidScheme(scheme.to_owned()))
    }
}

fn split_host_port(authority: &str) -> Result<(&str, Option<u16>), PatternError> {
    let (host, port) = if authority.starts_with('[') {
        match authority.find(']') {
            Some(end) => {
                let (host, rest) = authority.split_at(end + 1);
                match rest {
                    "" => (host, None),
                    _ => match rest.strip_prefix(':') {
                        Some(port) => (host, Some(port)),
                        None => return Err(PatternError::InvalidHost(authority.to_owned())),
                    },
                }
            }
            None => return Err(PatternError::InvalidHost(authority.to_owned())),
        }
    } else {
        match authority.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (authority, None),
        }
    };

    let port = port
        .map(|port| {
            port.parse::<u16>()
                .map_err(|_| PatternError::InvalidPort(port.to_owned()))
        })
        .transpose()?;

    Ok((host, port))
}

fn parse_host(host: &str, wildcard: bool) -> Result<String, PatternError> {
    let invalid = || PatternError::InvalidHost(host.to_owned());
    if host.is_empty() {
        return Err(invalid());
    }

    match Host::parse(host).map_err(|_| invalid())? {
        Host::Domain(domain) => {
            let well_formed = domain.bytes().all(is_host_label_char)
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains("..");
            if !well_formed {
                return Err(invalid());
            }
            // Wildcard roots keep their `www.` label.
            if wildcard {
                Ok(domain)
            } else {
                Ok(base_host(&domain).to_owned())
            }
        }
        Host::Ipv4(_) | Host::Ipv6(_) if wildcard => Err(invalid()),
        Host::Ipv4(address) => Ok(address.to_string()),
        Host::Ipv6(address) => Ok(format!("[{address}]")),
    }
}

/// `host` is the root itself or sits under it at a label boundary.
fn is_within_root(host: &str, root: &str) -> bool {
    match host.strip_suffix(root) {
        Some("") => true,
        Some(prefix) => prefix.len() > 1 && prefix.ends_with('.'),
        None => false,
    }
}

fn port_matches(expected: Option<u16>, candidate: &CandidateOrigin) -> bool {
    expected.is_none_or(|port| candidate.port() == Some(port))
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
