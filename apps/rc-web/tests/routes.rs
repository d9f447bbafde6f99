//! Route behavior over the closed-form property backend.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use rc_app::{AppConfig, BackendKind, WebConfig};
use rc_fluids::CorrelationOracle;
use rc_web::{AppState, SESSION_COOKIE, router};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = AppConfig {
        backend: BackendKind::Correlation,
        ..AppConfig::default()
    };
    router(
        AppState::with_oracle(config, |_| Arc::new(CorrelationOracle::default())).unwrap(),
    )
}

async fn body_string(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn session_cookie(resp: &Response) -> String {
    let raw = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    let pair = raw.split(';').next().unwrap().to_string();
    assert!(pair.starts_with(SESSION_COOKIE));
    pair
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    req.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    req.body(Body::from(body.to_string())).unwrap()
}

fn form(uri: &str, cookie: &str, body: &str) -> Request<Body> {
    post_form(uri, Some(cookie), body)
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// First form post from a browser without a cookie.
async fn start_session(app: &Router, uri: &str, body: &str) -> String {
    let resp = app
        .clone()
        .oneshot(post_form(uri, None, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    session_cookie(&resp)
}

async fn new_session(app: &Router) -> String {
    start_session(app, "/calculate", "frequency=60&valve_opening=50&fan_speed=750").await
}

async fn live_sessions(app: &Router) -> u64 {
    let resp = app.clone().oneshot(get("/health", None)).await.unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    json["sessions"].as_u64().unwrap()
}

async fn calculate_and_save(app: &Router, cookie: &str, body: &str) {
    let resp = app
        .clone()
        .oneshot(form("/calculate", cookie, body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let resp = app
        .clone()
        .oneshot(form("/snapshots/save", cookie, ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

async fn labels(app: &Router, cookie: Option<&str>) -> Vec<String> {
    let resp = app
        .clone()
        .oneshot(get("/api/snapshots", cookie))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    serde_json::from_str(&body_string(resp).await).unwrap()
}

#[tokio::test]
async fn health_reports_backend() {
    let resp = app().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["backend"], "Correlation");
}

#[tokio::test]
async fn index_renders_chart_without_cycle() {
    let resp = app().oneshot(get("/", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
    let html = body_string(resp).await;
    assert!(html.contains("<svg"));
    assert!(html.contains("dome-vapor"));
    assert!(!html.contains("class=\"cycle\""));
}

#[tokio::test]
async fn cookieless_page_views_store_nothing() {
    let app = app();
    for _ in 0..50 {
        let resp = app.clone().oneshot(get("/", None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    let stale = format!("{SESSION_COOKIE}=00000000-0000-0000-0000-000000000000");
    let resp = app.clone().oneshot(get("/", Some(&stale))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(live_sessions(&app).await, 0);

    let _ = new_session(&app).await;
    assert_eq!(live_sessions(&app).await, 1);
}

#[tokio::test]
async fn session_cap_bounds_registry() {
    let config = AppConfig {
        backend: BackendKind::Correlation,
        web: WebConfig {
            max_sessions: 3,
            ..WebConfig::default()
        },
        ..AppConfig::default()
    };
    let app = router(
        AppState::with_oracle(config, |_| Arc::new(CorrelationOracle::default())).unwrap(),
    );
    let mut cookies = Vec::new();
    for _ in 0..10 {
        cookies.push(new_session(&app).await);
    }
    assert_eq!(live_sessions(&app).await, 3);
    let newest = cookies.last().unwrap();
    let html = body_string(app.clone().oneshot(get("/", Some(newest))).await.unwrap()).await;
    assert!(html.contains("class=\"cycle\""));
}

#[tokio::test]
async fn api_cycle_computes_baseline() {
    let resp = app()
        .oneshot(json_post(
            "/api/cycle",
            r#"{"frequency":60.0,"valve_opening":50.0,"fan_speed":750.0}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert!(json["metrics"]["cooling_effect_kj_per_kg"].as_f64().unwrap() > 0.0);
    assert!(json["metrics"]["compressor_work_kj_per_kg"].as_f64().unwrap() > 0.0);
    assert_eq!(
        json["cycle"]["suction"]["pressure_kpa"],
        json["cycle"]["evaporator_inlet"]["pressure_kpa"]
    );
}

#[tokio::test]
async fn api_cycle_rejects_out_of_range() {
    let resp = app()
        .oneshot(json_post(
            "/api/cycle",
            r#"{"frequency":500.0,"valve_opening":50.0,"fan_speed":750.0}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["error"], "BadRequest");
}

#[tokio::test]
async fn sessions_do_not_share_snapshots() {
    let app = app();
    let a = new_session(&app).await;
    let b = new_session(&app).await;
    assert_ne!(a, b);

    calculate_and_save(&app, &a, "frequency=60&valve_opening=50&fan_speed=750").await;

    assert_eq!(labels(&app, Some(&a)).await, vec!["Comp_60.0Hz_EEV_50.0%_Fan_750RPM"]);
    assert!(labels(&app, Some(&b)).await.is_empty());
    assert!(labels(&app, None).await.is_empty());
}

#[tokio::test]
async fn snapshot_is_served_as_json() {
    let app = app();
    let a = new_session(&app).await;
    calculate_and_save(&app, &a, "frequency=90&valve_opening=20&fan_speed=300.7").await;

    let resp = app
        .clone()
        .oneshot(get("/api/snapshots/Comp_90.0Hz_EEV_20.0%25_Fan_300RPM", Some(&a)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["settings"]["frequency"], 90.0);

    let resp = app
        .clone()
        .oneshot(get("/api/snapshots/missing", Some(&a)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_save_shows_warning() {
    let app = app();
    let a = new_session(&app).await;
    calculate_and_save(&app, &a, "frequency=60&valve_opening=50&fan_speed=750").await;
    let resp = app
        .clone()
        .oneshot(form("/snapshots/save", &a, ""))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let html = body_string(app.clone().oneshot(get("/", Some(&a))).await.unwrap()).await;
    assert!(html.contains("notice-warning"));
    assert_eq!(labels(&app, Some(&a)).await.len(), 1);
}

#[tokio::test]
async fn save_before_calculate_shows_error() {
    let app = app();
    let a = start_session(&app, "/snapshots/save", "").await;
    let html = body_string(app.clone().oneshot(get("/", Some(&a))).await.unwrap()).await;
    assert!(html.contains("notice-error"));
    assert!(html.contains("Nothing has been calculated yet"));
}

#[tokio::test]
async fn load_restores_inputs_and_delete_removes() {
    let app = app();
    let a = new_session(&app).await;
    calculate_and_save(&app, &a, "frequency=90&valve_opening=20&fan_speed=300").await;
    app.clone()
        .oneshot(form("/calculate", &a, "frequency=40&valve_opening=80&fan_speed=1200"))
        .await
        .unwrap();

    let label = "Comp_90.0Hz_EEV_20.0%25_Fan_300RPM";
    app.clone()
        .oneshot(form("/snapshots/load", &a, &format!("label={label}")))
        .await
        .unwrap();
    let html = body_string(app.clone().oneshot(get("/", Some(&a))).await.unwrap()).await;
    assert!(html.contains("name=\"frequency\" min=\"30\" max=\"120\" step=\"0.1\" value=\"90\""));
    assert!(html.contains("class=\"cycle\""));

    app.clone()
        .oneshot(form("/snapshots/delete", &a, &format!("label={label}")))
        .await
        .unwrap();
    assert!(labels(&app, Some(&a)).await.is_empty());
}

#[tokio::test]
async fn load_without_selection_is_error() {
    let app = app();
    let a = start_session(&app, "/snapshots/load", "").await;
    let html = body_string(app.clone().oneshot(get("/", Some(&a))).await.unwrap()).await;
    assert!(html.contains("no snapshot selected"));
}
