//! # アプリケーション構築
//!
//! DI（ユースケース・State）の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use restdemo_domain::clock::Clock;
use restdemo_infra::repository::UserRepository;
use restdemo_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        UserState,
        create_user,
        delete_user,
        get_user,
        health_check,
        hello,
        list_users,
        update_user,
    },
    usecase::UserServiceImpl,
};

/// リポジトリと時刻プロバイダからユーザー API の State を組み立てる
pub fn build_user_state(
    user_repository: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
) -> Arc<UserState> {
    let service = UserServiceImpl::new(user_repository, clock);
    Arc::new(UserState {
        service: Arc::new(service),
    })
}

/// ルーターを構築する
///
/// Request ID 関連のレイヤーは外側から
/// `SetRequestId → Trace → PropagateRequestId` の順に適用される。
pub fn build_app(user_state: Arc<UserState>) -> Router {
    Router::new()
        .route("/", any(hello))
        .route("/health", get(health_check))
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(user_state)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
