use crate::constants::header;
use crate::decision::{CorsDecision, OriginStatus};
use crate::headers::{HeaderCollection, Headers};

pub(crate) struct HeaderBuilder<'a> {
    decision: &'a CorsDecision,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(decision: &'a CorsDecision) -> Self {
        Self { decision }
    }

    pub(crate) fn build(self) -> Headers {
        let mut headers = HeaderCollection::new();
        if self.decision.status == OriginStatus::NotApplicable {
            return headers.into_headers();
        }

        headers.extend(self.build_origin_headers());
        if self.decision.allow_origin.is_some() {
            headers.extend(self.build_credentials_header());
            headers.extend(self.build_methods_header());
            headers.extend(self.build_allowed_headers());
            if self.decision.preflight {
                headers.extend(self.build_max_age_header());
            } else {
                headers.extend(self.build_exposed_headers());
            }
        }
        headers.into_headers()
    }

    /// `Vary: Origin` is emitted for denied origins as well, so a shared
    /// cache never replays one origin's answer to another.
    pub(crate) fn build_origin_headers(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(2);
        if let Some(origin) = &self.decision.allow_origin {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_ORIGIN.to_string(),
                origin.clone(),
            );
        }
        headers.add_vary(header::ORIGIN);
        if self.decision.preflight {
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        }
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.decision.allow_credentials {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                "true".to_string(),
            );
        }
        headers
    }

    pub(crate) fn build_methods_header(&self) -> HeaderCollection {
        list_header(header::ACCESS_CONTROL_ALLOW_METHODS, &self.decision.allow_methods)
    }

    pub(crate) fn build_allowed_headers(&self) -> HeaderCollection {
        list_header(header::ACCESS_CONTROL_ALLOW_HEADERS, &self.decision.allow_headers)
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        list_header(header::ACCESS_CONTROL_EXPOSE_HEADERS, &self.decision.expose_headers)
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if let Some(max_age) = self.decision.max_age {
            headers.push(
                header::ACCESS_CONTROL_MAX_AGE.to_string(),
                max_age.to_string(),
            );
        }
        headers
    }
}

fn list_header(name: &str, values: &[String]) -> HeaderCollection {
    let mut headers = HeaderCollection::with_estimate(1);
    if !values.is_empty() {
        headers.push(name.to_string(), values.join(","));
    }
    headers
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
