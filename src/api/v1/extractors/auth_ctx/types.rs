/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - 認証フィルタが request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - request extensions に載せるので寿命は 1 リクエスト。レスポンス完了と同時に破棄される
 * - 中身は AuthenticationManager が返した Identity そのもの (常に authenticated)
 */

use std::sync::Arc;

use crate::services::auth::Identity;

/// 認証済みのリクエストに付与されるコンテキスト
#[derive(Debug, Clone)]
pub struct AuthCtx {
    identity: Arc<Identity>,
}

impl AuthCtx {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity: Arc::new(identity),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn principal(&self) -> &str {
        self.identity.principal()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.identity.has_role(role)
    }
}
