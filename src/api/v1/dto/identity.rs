/*
 * Responsibility
 * - form login の request と、identity を返すときの response DTO
 */
use serde::{Deserialize, Serialize};

use crate::services::auth::Identity;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub principal: String,
    pub roles: Vec<String>,
}

impl From<&Identity> for IdentityResponse {
    fn from(identity: &Identity) -> Self {
        let mut roles: Vec<String> = identity.roles().iter().cloned().collect();
        // HashSet なので順序が揺れる。レスポンスを決定的にする
        roles.sort();

        Self {
            principal: identity.principal().to_string(),
            roles,
        }
    }
}
