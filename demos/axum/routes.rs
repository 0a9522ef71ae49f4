use axum::{
    Extension,
    extract::State,
    response::{Html, IntoResponse},
};
use origin_trust::CorsDecision;

use crate::cors::AppState;

pub async fn greet(
    State(state): State<AppState>,
    Extension(decision): Extension<CorsDecision>,
) -> impl IntoResponse {
    let caller = decision.allow_origin().unwrap_or("a same-origin client");
    Html(format!(
        "<h1>{}</h1><p>Served to {caller}.</p>",
        state.greeting
    ))
}
