/*
 * Responsibility
 * - GET /whoami: 現在の認証済み identity を返す
 * - AuthCtx extractor の配線確認用でもある
 */
use axum::Json;

use crate::api::v1::dto::identity::IdentityResponse;
use crate::api::v1::extractors::AuthCtxExtractor;

pub async fn whoami(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<IdentityResponse> {
    Json(IdentityResponse::from(ctx.identity()))
}
