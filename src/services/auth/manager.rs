//! AuthenticationManager の契約と、認証まわりの共有型。
//!
//! ここは HTTP 非依存。credential の取り出し方 (header / query / Basic) は
//! middleware 側の CredentialScheme が担当し、ここには (principal, secret) の
//! ペアだけが届く。

use std::collections::HashSet;

use async_trait::async_trait;
use thiserror::Error;

/// リクエストから取り出した (principal, secret)。
///
/// 欠けている値は `""` に正規化する (Option にしない)。
/// 下流の比較ロジックを channel 非依存で一様にするため。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub principal: String,
    pub secret: String,
}

impl CredentialPair {
    pub fn new(principal: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            secret: secret.into(),
        }
    }
}

/// 認証済みの主体。AuthenticationManager だけが生成する。
///
/// コンストラクタ経由でしか作れず、常に `authenticated == true` になる。
/// 「部分的に認証された」状態の Identity は存在しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    principal: String,
    roles: HashSet<String>,
    authenticated: bool,
}

impl Identity {
    pub fn authenticated(
        principal: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            principal: principal.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            authenticated: true,
        }
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn roles(&self) -> &HashSet<String> {
        &self.roles
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// 認証失敗。reason はログ専用で、クライアントには一律 401 (body なし) のみ返す。
/// どのフィールドが間違っていたかをレスポンスで区別しない (user enumeration 対策)。
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("unknown principal")]
    UnknownPrincipal,

    #[error("bad secret")]
    BadSecret,

    #[error("account disabled")]
    Disabled,
}

/// 認証の実体 (credential store への lookup を含んでよいので async)。
///
/// Implementations must be cheap to share (`Arc<dyn AuthenticationManager>`).
#[async_trait]
pub trait AuthenticationManager: Send + Sync {
    async fn authenticate(&self, pair: &CredentialPair) -> Result<Identity, AuthenticationError>;
}
