/*
 * Responsibility
 * - POST /login (form login)
 * - filter chain とは別の入口だが、同じ AuthenticationManager に委譲する
 * - stateless: セッションは作らない。成功しても次のリクエストは再認証
 */
use axum::{Form, Json, extract::State};

use crate::api::v1::dto::identity::{IdentityResponse, LoginRequest};
use crate::error::AppError;
use crate::services::auth::CredentialPair;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Form(req): Form<LoginRequest>,
) -> Result<Json<IdentityResponse>, AppError> {
    let pair = CredentialPair::new(req.username, req.password);

    if pair.principal.is_empty() {
        return Err(AppError::Unauthorized);
    }

    let identity = state.auth.authenticate(&pair).await.map_err(|err| {
        tracing::warn!(error = %err, "form login failed");
        AppError::Unauthorized
    })?;

    Ok(Json(IdentityResponse::from(&identity)))
}
