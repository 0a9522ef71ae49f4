use std::sync::Arc;

use origin_trust::{
    AllowedHeaders, AllowedMethods, Cors, CorsOptions, ExposedHeaders, ValidationError,
};

pub mod middleware;

#[derive(Clone)]
pub struct AppState {
    pub cors: Arc<Cors>,
    pub greeting: &'static str,
}

/// Reads trusted origins from `CORS_TRUSTED_ORIGINS` when set, otherwise
/// trusts the local frontend and every `example.com` subdomain.
pub fn build_state() -> Result<AppState, ValidationError> {
    let mut options = CorsOptions::from_env();
    if options.trusted_origins.is_empty() {
        options.trusted_origins = vec!["http://localhost:3000".into(), "*.example.com".into()];
    }

    let options = CorsOptions {
        methods: AllowedMethods::list(["GET", "POST", "OPTIONS"]),
        allowed_headers: AllowedHeaders::list([
            "Content-Type",
            "X-Requested-With",
            "X-Example-Trace",
        ]),
        exposed_headers: ExposedHeaders::list(["X-Example-Trace"]),
        max_age: Some(600),
        ..options
    };

    Ok(AppState {
        cors: Arc::new(Cors::new(options)?),
        greeting: "Welcome to the Axum origin trust example!",
    })
}
