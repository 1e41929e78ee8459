//! ルール表の適用 (認可)。
//!
//! 認証フィルタの内側で動く。この時点で AuthCtx が extensions に
//! あるかどうかだけを見る。どの scheme で認証されたかは関知しない。
//!
//! - Public → そのまま next
//! - Authenticated → AuthCtx がなければ 401
//! - AnyRole → AuthCtx がなければ 401、あるが role 不足なら 403

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::v1::extractors::AuthCtx;
use crate::services::auth::Requirement;
use crate::state::AppState;

pub fn apply(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, enforce))
}

async fn enforce(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let requirement = state
        .rules
        .requirement(req.method(), req.uri().path())
        .clone();

    match requirement {
        Requirement::Public => next.run(req).await,
        Requirement::Authenticated => {
            if req.extensions().get::<AuthCtx>().is_some() {
                next.run(req).await
            } else {
                StatusCode::UNAUTHORIZED.into_response()
            }
        }
        Requirement::AnyRole(roles) => match req.extensions().get::<AuthCtx>() {
            None => StatusCode::UNAUTHORIZED.into_response(),
            Some(ctx) if roles.iter().any(|role| ctx.has_role(role)) => next.run(req).await,
            Some(ctx) => {
                tracing::warn!(
                    principal = %ctx.principal(),
                    required = ?roles,
                    "authenticated but lacking required role"
                );
                StatusCode::FORBIDDEN.into_response()
            }
        },
    }
}
