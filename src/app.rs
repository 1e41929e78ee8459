/*
 * Responsibility
 * - tracing/panic hook の初期化、Config 読み込み → 依存生成 → Router 組み立て
 * - 認証フィルタ chain・ルール表・CORS などの適用順もここで決める
 * - axum::serve() で起動
 */
use std::sync::Arc;
use std::{panic, process};

use anyhow::Result;
use axum::http::Method;
use axum::{Router, routing::post};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::{self, v1::handlers::login::login};
use crate::config::Config;
use crate::middleware;
use crate::services::auth::{MemoryAuthenticationManager, Requirement, RuleSet};
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,orders_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Always surface panics via tracing so they don't get "lost".
        tracing::error!(?info, "panic");

        // In development, fail fast. In production, keep the server running.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state();
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn build_state() -> AppState {
    let manager = Arc::new(MemoryAuthenticationManager::with_default_users());
    AppState::new(manager, default_rules())
}

/// ルール表。上から順に評価、最初のマッチが勝ち。
/// どれにもマッチしないパスの既定は Authenticated。
pub fn default_rules() -> RuleSet {
    RuleSet::new()
        .route("/", Requirement::Public)
        .route("/login", Requirement::Public)
        .route("/api/v1/health", Requirement::Public)
        .route_method(Method::GET, "/api/v1/orders/**", Requirement::Public)
        .route_method(
            Method::DELETE,
            "/api/v1/orders/*",
            Requirement::AnyRole(vec!["ADMIN".into()]),
        )
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .route("/login", post(login))
        .nest("/api/v1", api::v1::routes())
        .with_state(state.clone());

    // .layer() は後掛けが外側。実行順 (外→内):
    // http → cors → security_headers → 認証フィルタ chain → authorize → handler
    let router = middleware::authorize::apply(router, state.clone());
    let router = middleware::auth::apply(router, state);
    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}
