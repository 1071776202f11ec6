use crate::errors::AppError;
use crate::models::{IntervalRequest, UploadParams, ViewResponse};
use crate::pipeline::{decode, load_file, Dashboard};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
    Json,
};
use std::num::NonZeroUsize;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&build_view(&dashboard)))
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(build_view(&dashboard))
}

pub async fn upload(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<Json<ViewResponse>, AppError> {
    let file_name = params.name.filter(|name| !name.trim().is_empty());
    // Parsing happens before the lock; a failed load never touches the dashboard.
    let log = decode(&body).and_then(load_file).map_err(|err| {
        warn!(file = ?file_name, "rejected upload: {err}");
        AppError::from(err)
    })?;

    let mut dashboard = state.dashboard.lock().await;
    info!(file = ?file_name, days = log.series.len(), "dataset replaced");
    dashboard.replace(log, file_name);
    Ok(Json(build_view(&dashboard)))
}

pub async fn set_interval(
    State(state): State<AppState>,
    Json(payload): Json<IntervalRequest>,
) -> Result<Json<ViewResponse>, AppError> {
    let days = NonZeroUsize::new(payload.days)
        .ok_or_else(|| AppError::bad_request("days must be a positive number"))?;

    let mut dashboard = state.dashboard.lock().await;
    dashboard.window_mut().set_interval(days);
    Ok(Json(build_view(&dashboard)))
}

pub async fn period_previous(State(state): State<AppState>) -> Json<ViewResponse> {
    navigate(&state, |dashboard| dashboard.window_mut().page_previous()).await
}

pub async fn period_next(State(state): State<AppState>) -> Json<ViewResponse> {
    navigate(&state, |dashboard| dashboard.window_mut().page_next()).await
}

pub async fn period_latest(State(state): State<AppState>) -> Json<ViewResponse> {
    navigate(&state, |dashboard| dashboard.window_mut().reset_to_latest()).await
}

async fn navigate(state: &AppState, step: impl FnOnce(&mut Dashboard)) -> Json<ViewResponse> {
    let mut dashboard = state.dashboard.lock().await;
    step(&mut dashboard);
    Json(build_view(&dashboard))
}

pub fn build_view(dashboard: &Dashboard) -> ViewResponse {
    let window = dashboard.window();
    let stats = dashboard.stats();
    ViewResponse {
        loaded: dashboard.is_loaded(),
        file_name: dashboard.file_name().map(str::to_string),
        warning_count: dashboard.warning_count(),
        interval_days: window.interval(),
        start_index: window.start(),
        total_days: window.len(),
        label: dashboard.label(),
        can_go_previous: dashboard.is_loaded() && !window.is_at_start(),
        can_go_next: dashboard.is_loaded() && !window.is_at_latest(),
        days: dashboard.current_slice().to_vec(),
        stats: (&stats).into(),
    }
}
