use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::AppState;

/// Attaches the CORS decision to the request, answers preflights and
/// untrusted origins directly, and decorates every response.
pub async fn cors_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let decision = state.cors.enrich(&mut request);

    let mut response = if decision.should_reject() {
        (StatusCode::FORBIDDEN, "origin not trusted").into_response()
    } else if decision.is_preflight() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    decision.write_headers(response.headers_mut());
    response
}
