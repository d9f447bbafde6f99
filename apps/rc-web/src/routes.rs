use crate::error::ApiError;
use crate::render::{self, PageView};
use crate::sessions::{SessionRegistry, WebSession};
use axum::{
    Form, Json, Router,
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use rc_app::{
    AppConfig, AppResult, BackendKind, ControlInputs, CycleReport, Notice, PhChart,
    PropertyOracle, build_oracle, compute_report, save_notice,
};
use rc_snapshots::Snapshot;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub oracle: Arc<dyn PropertyOracle>,
    pub registry: SessionRegistry,
}

impl AppState {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Self::with_oracle(config, build_oracle)
    }

    /// State whose oracle comes from `make`, given the configured backend.
    /// The saturation dome is sampled here, once for all sessions.
    pub fn with_oracle(
        config: AppConfig,
        make: impl FnOnce(BackendKind) -> Arc<dyn PropertyOracle>,
    ) -> AppResult<Self> {
        let oracle = make(config.backend);
        let chart = PhChart::build(oracle.as_ref(), &config.chart)?;
        tracing::debug!(samples = chart.dome.len(), "saturation dome sampled");
        let registry = SessionRegistry::new(Arc::new(config), oracle.clone(), Arc::new(chart));
        Ok(Self { oracle, registry })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
        .route("/snapshots/save", post(save_snapshot))
        .route("/snapshots/load", post(load_snapshot))
        .route("/snapshots/delete", post(delete_snapshot))
        .route("/api/cycle", post(api_cycle))
        .route("/api/snapshots", get(api_snapshots))
        .route("/api/snapshots/:label", get(api_snapshot))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct InputsForm {
    pub frequency: f64,
    pub valve_opening: f64,
    pub fan_speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct LabelForm {
    #[serde(default)]
    pub label: String,
}

/// Browsers without a session see the defaults; nothing is stored until
/// they post a form.
async fn index(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let html = match state.registry.with_existing(&jar, render_session) {
        Some(html) => html,
        None => render_session(&mut state.registry.detached()),
    };
    (jar, Html(html))
}

fn render_session(ws: &mut WebSession) -> String {
    let notice = ws.flash.take();
    let chart = ws.session.chart();
    let session = &ws.session;
    let rows = session.state_rows();
    let metrics = session.metrics_view();
    let labels = session.snapshot_labels();
    render::page(&PageView {
        inputs: session.inputs(),
        rows: &rows,
        metrics: &metrics,
        chart: &chart,
        labels: &labels,
        notice: notice.as_ref(),
        backend: session.oracle().name(),
    })
}

async fn calculate(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<InputsForm>,
) -> impl IntoResponse {
    let inputs = ControlInputs::new(form.frequency, form.valve_opening, form.fan_speed);
    let (jar, ()) = state.registry.with_session(jar, |ws| {
        ws.session.set_inputs(inputs);
        ws.flash = match ws.session.calculate() {
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(%err, "calculation failed");
                Some(Notice::from_error(&err))
            }
        };
    });
    (jar, Redirect::to("/"))
}

async fn save_snapshot(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, ()) = state.registry.with_session(jar, |ws| {
        let result = ws.session.save_snapshot();
        ws.flash = Some(save_notice(&result));
    });
    (jar, Redirect::to("/"))
}

async fn load_snapshot(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LabelForm>,
) -> impl IntoResponse {
    let (jar, ()) = state.registry.with_session(jar, |ws| {
        ws.flash = Some(match ws.session.load_snapshot(&form.label) {
            Ok(_) => Notice::info(format!("Loaded {}", form.label)),
            Err(err) => Notice::from_error(&err),
        });
    });
    (jar, Redirect::to("/"))
}

async fn delete_snapshot(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LabelForm>,
) -> impl IntoResponse {
    let (jar, ()) = state.registry.with_session(jar, |ws| {
        ws.flash = Some(match ws.session.delete_snapshot(&form.label) {
            Ok(()) => Notice::info(format!("Deleted {}", form.label)),
            Err(err) => Notice::from_error(&err),
        });
    });
    (jar, Redirect::to("/"))
}

async fn api_cycle(
    State(state): State<AppState>,
    Json(inputs): Json<ControlInputs>,
) -> Result<Json<CycleReport>, ApiError> {
    if !inputs.in_range() {
        return Err(ApiError::BadRequest(format!(
            "inputs outside control ranges: {:.1} Hz, {:.1} %, {:.0} RPM",
            inputs.frequency, inputs.valve_opening, inputs.fan_speed
        )));
    }
    let report = compute_report(state.oracle.as_ref(), &inputs)?;
    Ok(Json(report))
}

async fn api_snapshots(State(state): State<AppState>, jar: CookieJar) -> Json<Vec<String>> {
    let labels = state
        .registry
        .with_existing(&jar, |ws| ws.session.snapshot_labels())
        .unwrap_or_default();
    Json(labels)
}

async fn api_snapshot(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(label): Path<String>,
) -> Result<Json<Snapshot>, ApiError> {
    let found = state
        .registry
        .with_existing(&jar, |ws| ws.session.store().load(&label).cloned())
        .ok_or_else(|| ApiError::NotFound(format!("Snapshot not found: {label}")))?;
    let snapshot = found.map_err(rc_app::AppError::from)?;
    Ok(Json(snapshot))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    backend: String,
    sessions: usize,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        backend: state.oracle.name().to_string(),
        sessions: state.registry.len(),
    })
}

