//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::error::{ComputeError, CycleError};
use crate::jobs::context::JobContext;
use crate::jobs::handlers::handle_manual_trade;
use crate::metrics::Metrics;
use crate::models::trade::TradeResponse;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub context: Arc<JobContext>,
}

impl AppState {
    pub fn new(context: Arc<JobContext>, metrics: Arc<Metrics>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            context,
        }
    }
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

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn api_error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "aurix-trade-bot"
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

/// Latest prime bid straight from the feed
async fn get_price(State(state): State<AppState>) -> ApiResult {
    let price = state
        .context
        .data_provider
        .get_latest_price()
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching gold price");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch gold price")
        })?;

    Ok(Json(json!({ "price": price })))
}

/// Most recent cycle log lines, newest first
async fn get_logs(State(state): State<AppState>) -> Json<Value> {
    let logs = state.context.log_sink.recent().await;
    Json(json!({ "logs": logs }))
}

/// Most recent trades, newest first
async fn get_trades(State(state): State<AppState>) -> ApiResult {
    let trades = state
        .context
        .trade_store
        .recent_trades(state.context.trade_query_limit)
        .await
        .map_err(|e| {
            error!(error = %e, "Error fetching trades");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch trades")
        })?;

    let responses: Vec<TradeResponse> = trades.into_iter().map(Into::into).collect();
    Ok(Json(json!(responses)))
}

/// Run one cycle on demand
async fn execute_trade(State(state): State<AppState>) -> ApiResult {
    let outcome = handle_manual_trade(&state.context)
        .await
        .map_err(|e| match e {
            CycleError::Compute(ComputeError::InsufficientData { current_price }) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Insufficient data for RSI calculation",
                    "currentPrice": current_price
                })),
            ),
            other => {
                error!(error = %other, "Error executing trade");
                api_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to execute trade")
            }
        })?;

    let body = match outcome.record {
        Some(record) => json!({
            "signal": record.signal,
            "stopLoss": record.stop_loss,
            "takeProfit": record.take_profit,
            "currentPrice": record.current_price,
            "rsi": record.rsi,
            "insertedId": record.id.to_string(),
        }),
        None => json!({
            "signal": outcome.decision.signal,
            "message": "No trade executed as RSI is within the neutral range.",
            "currentPrice": outcome.current_price,
            "rsi": outcome.rsi,
        }),
    };

    Ok(Json(body))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/price", get(get_price))
        .route("/api/logs", get(get_logs))
        .route("/api/trades", get(get_trades))
        .route("/api/trade", post(execute_trade))
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

pub async fn start_server(
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
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
