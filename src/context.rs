use crate::constants::{header, method};
use http::{HeaderMap, Method};

/// Borrowed view of the request fields the CORS engine reads.
///
/// `origin` is `None` only when the request carries no `Origin` header. A
/// header that is present but unreadable is kept as an empty string so it is
/// classified as malformed rather than mistaken for a same-origin request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn from_http(method: &'a Method, headers: &'a HeaderMap) -> Self {
        Self {
            method: method.as_str(),
            origin: origin_header(headers),
            access_control_request_method: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_str(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn from_request<B>(request: &'a http::Request<B>) -> Self {
        Self::from_http(request.method(), request.headers())
    }

    /// An `OPTIONS` request naming the method it intends to use.
    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case(method::OPTIONS)
            && self
                .access_control_request_method
                .is_some_and(|requested| !requested.trim().is_empty())
    }

    pub(crate) fn preflight_method(&self) -> Option<&'a str> {
        if self.is_preflight() {
            self.access_control_request_method
        } else {
            None
        }
    }
}

/// Multiple `Origin` headers are ambiguous and collapse to an empty value.
fn origin_header(headers: &HeaderMap) -> Option<&str> {
    let mut values = headers.get_all(header::ORIGIN).iter();
    let first = values.next()?;
    if values.next().is_some() {
        return Some("");
    }
    Some(first.to_str().unwrap_or_default())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
