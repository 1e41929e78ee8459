/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::repos::order_repo::OrderRepo;
use crate::services::auth::{AuthenticationManager, RuleSet};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthenticationManager>,
    pub rules: Arc<RuleSet>,
    pub orders: OrderRepo,
}

impl AppState {
    pub fn new(auth: Arc<dyn AuthenticationManager>, rules: RuleSet) -> Self {
        Self {
            auth,
            rules: Arc::new(rules),
            orders: OrderRepo::with_samples(),
        }
    }
}
