/*
 * Responsibility
 * - Config 読み込み → tracing / panic hook 初期化 → Router 組み立て
 * - Layer の適用 (request id / trace / timeout / auth context)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::{
    Router,
    error_handling::HandleErrorLayer,
    http::{StatusCode, header::HeaderName},
    routing::get,
};
use tower::{BoxError, ServiceBuilder, timeout::TimeoutLayer};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{api, config::Config, error::AppError};

const REQUEST_ID_HEADER: &str = "x-request-id";

// RUST_LOG wins when set, e.g. RUST_LOG=info,portcullis=debug
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Route panics through tracing. Outside production the process aborts.
fn init_panic_hook(abort_on_panic: bool) {
    let fallback = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let location = info.location().map(ToString::to_string);
        tracing::error!(location = ?location, payload = ?info.payload_as_str(), "panic");

        if abort_on_panic {
            process::abort();
        }
        fallback(info);
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        env = ?config.app_env,
        addr = %config.addr,
        timeout_secs = config.request_timeout.as_secs(),
        "starting portcullis"
    );

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(config: &Config) -> Router {
    let v1 = portcullis::http::layer(api::v1::routes());
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Outermost first: timeout errors become 408, request ids are set before tracing sees the request.
    let layers = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http());

    Router::new()
        .route("/health", get(api::v1::health))
        .nest("/api/v1", v1)
        .fallback(|| async { AppError::NotFound })
        .layer(layers)
}
