//! HTTP handlers and router assembly

use crate::dataset::SURAH_COUNT;
use crate::error::MushafError;
use crate::export::{export_filename, surah_text};
use crate::render;
use crate::state::AppState;
use crate::view::SurahView;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub type SharedState = Arc<AppState>;

/// Non-numeric input in the lookup form.
const MSG_PARSE: &str = "Masukkan angka 1–114.";
/// Numeric id outside 1..=114 on direct navigation.
const MSG_RANGE: &str = "Nomor surah harus 1 sampai 114.";

#[derive(Debug, Deserialize)]
pub struct GoForm {
    #[serde(default)]
    pub surah_id: String,
}

pub async fn home() -> Html<String> {
    Html(render::home_page(None))
}

/// Parse the submitted surah id and redirect to its page. Range
/// validation happens at the destination, not here.
pub async fn go(Form(form): Form<GoForm>) -> Response {
    match form.surah_id.trim().parse::<i64>() {
        Ok(sid) => Redirect::to(&format!("/surah/{sid}")).into_response(),
        Err(_) => {
            tracing::warn!("Rejected non-numeric surah id: {:?}", form.surah_id);
            Html(render::home_page(Some(MSG_PARSE))).into_response()
        }
    }
}

pub async fn show_surah(State(state): State<SharedState>, Path(id): Path<u32>) -> Response {
    if !(1..=SURAH_COUNT).contains(&id) {
        tracing::warn!("Surah id out of range: {}", id);
        return Html(render::home_page(Some(MSG_RANGE))).into_response();
    }
    match state.surah(id) {
        Some(surah) => Html(render::surah_page(&SurahView::build(surah))).into_response(),
        None => MushafError::NotFound(id).into_response(),
    }
}

/// `/export/:file` where `file` must be `{id}.txt`. Anything else,
/// including an out-of-range or absent id, is a 404.
pub async fn export_txt(State(state): State<SharedState>, Path(file): Path<String>) -> Response {
    let id = match file.strip_suffix(".txt").and_then(|s| s.parse::<u32>().ok()) {
        Some(id) if (1..=SURAH_COUNT).contains(&id) => id,
        _ => return StatusCode::NOT_FOUND.into_response(),
    };
    let Some(surah) = state.surah(id) else {
        return MushafError::NotFound(id).into_response();
    };

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", export_filename(id)),
        ),
    ];
    (headers, surah_text(surah)).into_response()
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/go", post(go))
        .route("/surah/:id", get(show_surah))
        .route("/export/:file", get(export_txt))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
