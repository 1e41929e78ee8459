//! 認証フィルタ本体: extract → authenticate → AuthCtx 設定 or 401。
//!
//! scheme ごとに独立した filter を chain する。各 filter の挙動:
//! - trigger 外 (public パスなど) → 何もせず next
//! - principal が空 (credential 不提示) → 何もせず next。
//!   後続の filter が自分の scheme を試すか、最終的に authorize 層が判定する
//! - 認証成功 → AuthCtx を request extensions に入れて next
//! - 認証失敗 → AuthCtx を消して 401 (body なし)。next は呼ばない
//!
//! AuthCtx は request extensions に載せるので、リクエストと一緒に破棄される。
//! thread-local のような request を跨ぐ置き場は使わない (リーク防止)。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::v1::extractors::AuthCtx;
use crate::services::auth::CredentialPair;
use crate::state::AppState;

use super::schemes::{BasicScheme, CredentialScheme, HeaderPairScheme, ParamPairScheme};

/// filter が反応する範囲。public パスでは認証を試みない。
#[derive(Debug, Clone)]
pub struct Trigger {
    path_prefix: Option<&'static str>,
}

impl Trigger {
    /// public 以外の全パス。
    pub const fn non_public() -> Self {
        Self { path_prefix: None }
    }

    /// public 以外、かつ指定 prefix 配下のみ。
    pub const fn path_prefix(prefix: &'static str) -> Self {
        Self {
            path_prefix: Some(prefix),
        }
    }

    fn matches(&self, state: &AppState, req: &Request<Body>) -> bool {
        if let Some(prefix) = self.path_prefix
            && !req.uri().path().starts_with(prefix)
        {
            return false;
        }
        !state.rules.is_public(req.method(), req.uri().path())
    }
}

/// filter chain を Router に適用する。
///
/// `.layer()` は後に付けたものが外側になるので、実行順 (外→内) は
/// header-pair → param-pair → Basic → handler となる。
/// authorize 層は app.rs 側でこの内側に適用しておくこと。
pub fn apply(router: Router, state: AppState) -> Router {
    router
        .layer(middleware::from_fn_with_state(state.clone(), basic_auth))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            param_pair_auth,
        ))
        .layer(middleware::from_fn_with_state(state, header_pair_auth))
}

async fn header_pair_auth(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    run(
        &HeaderPairScheme::default(),
        &Trigger::path_prefix("/api/"),
        &state,
        req,
        next,
    )
    .await
}

async fn param_pair_auth(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    run(
        &ParamPairScheme::default(),
        &Trigger::path_prefix("/api/"),
        &state,
        req,
        next,
    )
    .await
}

async fn basic_auth(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    run(&BasicScheme, &Trigger::non_public(), &state, req, next).await
}

/// 1 リクエスト分の認証試行。どの scheme でも流れは同じで、
/// 取り出し方だけを `scheme` に委ねる。
pub async fn run(
    scheme: &dyn CredentialScheme,
    trigger: &Trigger,
    state: &AppState,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if !trigger.matches(state, &req) {
        return next.run(req).await;
    }

    let pair = CredentialPair::new(scheme.principal(&req), scheme.secret(&req));

    // credential 不提示は「この scheme は試されなかった」扱い。
    // manager は呼ばず、判定は後続に委ねる。
    if pair.principal.is_empty() {
        return next.run(req).await;
    }

    tracing::debug!(
        scheme = scheme.name(),
        principal = %pair.principal,
        "attempting authentication"
    );

    match state.auth.authenticate(&pair).await {
        Ok(identity) => {
            // 成功した scheme の結果で上書き
            req.extensions_mut().insert(AuthCtx::new(identity));
            next.run(req).await
        }
        Err(err) => {
            // reason はログのみ。クライアントには一律 401 (body なし)
            tracing::warn!(
                scheme = scheme.name(),
                error = %err,
                "authentication failed"
            );
            req.extensions_mut().remove::<AuthCtx>();
            StatusCode::UNAUTHORIZED.into_response()
        }
    }
}
