use crate::allowed_headers::mirror_request_headers;
use crate::context::RequestContext;
use crate::decision::{CorsDecision, OriginStatus};
use crate::extensions::CorsContextExt;
use crate::matcher::TrustedOrigins;
use crate::options::{CorsOptions, ValidationError};
use crate::util::is_http_token;
use tracing::{debug, trace, warn};

/// CORS engine evaluating requests against an immutable trusted-origin set.
///
/// Cheap to share: wrap it in an `Arc` and hand it to every request handler.
#[derive(Debug, Clone)]
pub struct Cors {
    trusted_origins: TrustedOrigins,
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        let trusted_origins = TrustedOrigins::parse(&options.trusted_origins)?;
        if trusted_origins.is_empty() {
            warn!("no trusted origins configured; every cross-origin request will be denied");
        }

        Ok(Self {
            trusted_origins,
            options,
        })
    }

    pub fn trusted_origins(&self) -> &TrustedOrigins {
        &self.trusted_origins
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn is_origin_trusted(&self, origin: &str) -> bool {
        self.trusted_origins.is_trusted(origin)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        build_decision(
            request.origin,
            &self.trusted_origins,
            request.preflight_method(),
            request.access_control_request_headers,
            &self.options,
        )
    }

    /// Evaluates `request` and attaches the decision to its extensions.
    pub fn enrich<B>(&self, request: &mut http::Request<B>) -> CorsDecision {
        let decision = self.check(&RequestContext::from_request(request));
        request.attach_cors_decision(decision.clone());
        decision
    }
}

/// Builds the decision for one request.
///
/// A non-empty `requested_method` marks the request as a preflight; callers
/// pass it only for `OPTIONS` requests (see [`RequestContext::is_preflight`]).
pub fn build_decision(
    origin: Option<&str>,
    trusted_origins: &TrustedOrigins,
    requested_method: Option<&str>,
    requested_headers: Option<&str>,
    options: &CorsOptions,
) -> CorsDecision {
    let Some(origin) = origin else {
        return CorsDecision::not_applicable();
    };

    let requested_method = requested_method
        .map(str::trim)
        .filter(|method| !method.is_empty());
    let preflight = requested_method.is_some();

    let status = trusted_origins.classify(origin);
    if status != OriginStatus::Trusted {
        debug!(origin, ?status, preflight, "cross-origin request denied");
        return CorsDecision::denied(status, preflight);
    }

    let allow_methods = match requested_method {
        Some(method) if is_http_token(method) => vec![method.to_owned()],
        _ => options.methods.values().to_vec(),
    };

    let mirrored = match (requested_method, requested_headers) {
        (Some(_), Some(requested)) => mirror_request_headers(requested),
        _ => Vec::new(),
    };
    let allow_headers = if mirrored.is_empty() {
        options.allowed_headers.values().to_vec()
    } else {
        mirrored
    };

    trace!(origin, preflight, "cross-origin request admitted");
    CorsDecision {
        status,
        allow_origin: Some(origin.trim().to_owned()),
        allow_credentials: options.credentials,
        allow_methods,
        allow_headers,
        expose_headers: options.exposed_headers.values().to_vec(),
        max_age: options.max_age,
        preflight,
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
