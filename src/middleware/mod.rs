/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - 適用順は app.rs 側で決める
 */
pub mod auth;
pub mod authorize;
pub mod cors;
pub mod http;
pub mod security_headers;
