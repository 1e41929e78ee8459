/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 認証・認可はここでは掛けない。filter chain とルール表は app.rs で適用する
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    orders::{create_order, delete_order, get_order, list_orders},
    whoami::whoami,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{order_id}", get(get_order).delete(delete_order))
        .route("/whoami", get(whoami))
}
