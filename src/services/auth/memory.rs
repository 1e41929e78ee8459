//! In-memory の AuthenticationManager。
//!
//! 本番の credential store の代わりに、起動時に登録したユーザー表で認証する。
//! パスワードハッシュのスキーム選択はこの層の責務外 (平文比較)。

use std::collections::HashMap;

use async_trait::async_trait;

use super::manager::{AuthenticationError, AuthenticationManager, CredentialPair, Identity};

struct UserRecord {
    secret: String,
    roles: Vec<String>,
    enabled: bool,
}

#[derive(Default)]
pub struct MemoryAuthenticationManager {
    users: HashMap<String, UserRecord>,
}

impl MemoryAuthenticationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 開発・テスト用の既定ユーザー。
    pub fn with_default_users() -> Self {
        Self::new()
            .with_user("spring", "spring", ["ADMIN"])
            .with_user("user", "password", ["USER"])
            .with_user("scott", "tiger", ["CUSTOMER"])
    }

    pub fn with_user(
        self,
        principal: &str,
        secret: &str,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(principal, secret, roles, true)
    }

    pub fn with_disabled_user(
        self,
        principal: &str,
        secret: &str,
        roles: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(principal, secret, roles, false)
    }

    fn insert(
        mut self,
        principal: &str,
        secret: &str,
        roles: impl IntoIterator<Item = impl Into<String>>,
        enabled: bool,
    ) -> Self {
        self.users.insert(
            principal.to_string(),
            UserRecord {
                secret: secret.to_string(),
                roles: roles.into_iter().map(Into::into).collect(),
                enabled,
            },
        );
        self
    }
}

#[async_trait]
impl AuthenticationManager for MemoryAuthenticationManager {
    async fn authenticate(
        &self,
        pair: &CredentialPair,
    ) -> Result<Identity, AuthenticationError> {
        let record = self
            .users
            .get(&pair.principal)
            .ok_or(AuthenticationError::UnknownPrincipal)?;

        if !record.enabled {
            return Err(AuthenticationError::Disabled);
        }
        if record.secret != pair.secret {
            return Err(AuthenticationError::BadSecret);
        }

        Ok(Identity::authenticated(
            &pair.principal,
            record.roles.iter().cloned(),
        ))
    }
}
