/*
 * Responsibility
 * - モジュール公開 (binary と tests/ が同じ router を使えるように)
 * - ロジックは置かない
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
