//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config;
use crate::generator;
use crate::metrics::Metrics;
use crate::models::initiative::{FinancialMetric, Initiative, OperationalMetric};

const SERVICE_NAME: &str = "portopulse-source-api";
const DEFAULT_DAYS_BACK: u32 = 30;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    /// Initiative cache generated once at startup, stable across requests so
    /// metric series always reference the same identifiers.
    pub initiatives: Arc<Vec<Initiative>>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME,
        "initiatives_count": state.initiatives.len()
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();

    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    state.metrics.http_requests_in_flight.dec();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct MetricsQuery {
    days_back: Option<u32>,
}

/// List the cached initiative table
async fn list_initiatives(State(state): State<AppState>) -> Json<Vec<Initiative>> {
    Json(state.initiatives.as_ref().clone())
}

/// Get one initiative by identifier
async fn get_initiative(
    State(state): State<AppState>,
    Path(initiative_id): Path<String>,
) -> Result<Json<Initiative>, StatusCode> {
    state
        .initiatives
        .iter()
        .find(|i| i.initiative_id == initiative_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Generate a fresh financial series for the cached initiatives
async fn financial_metrics(
    State(state): State<AppState>,
    Query(params): Query<MetricsQuery>,
) -> Json<Vec<FinancialMetric>> {
    let days_back = params.days_back.unwrap_or(DEFAULT_DAYS_BACK);
    let mut rng = rand::thread_rng();
    Json(generator::generate_financial_metrics(
        &state.initiatives,
        days_back,
        &mut rng,
        Utc::now(),
    ))
}

/// Generate a fresh operational series for the cached initiatives
async fn operational_metrics(
    State(state): State<AppState>,
    Query(params): Query<MetricsQuery>,
) -> Json<Vec<OperationalMetric>> {
    let days_back = params.days_back.unwrap_or(DEFAULT_DAYS_BACK);
    let mut rng = rand::thread_rng();
    Json(generator::generate_operational_metrics(
        &state.initiatives,
        days_back,
        &mut rng,
        Utc::now(),
    ))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/initiatives", get(list_initiatives))
        .route("/initiatives/{id}", get(get_initiative))
        .route("/financial-metrics", get(financial_metrics))
        .route("/operational-metrics", get(operational_metrics))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    // Scoped so the non-Send ThreadRng is dropped before any await point,
    // keeping this future Send for tokio::spawn.
    let initiatives = {
        let mut rng = rand::thread_rng();
        generator::generate_initiatives(config::get_initiative_count(), &mut rng, Utc::now())
    };
    info!(count = initiatives.len(), "Generated initiative cache");

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: metrics.clone(),
        start_time: start_time.clone(),
        initiatives: Arc::new(initiatives),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
