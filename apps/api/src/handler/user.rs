//! # ユーザーハンドラ
//!
//! ユーザー CRUD API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /api/users` - ユーザー作成
//! - `GET /api/users` - ユーザー一覧（作成順）
//! - `GET /api/users/{id}` - ユーザー取得
//! - `PUT /api/users/{id}` - ユーザー更新（名前とメールアドレスの全体置換）
//! - `DELETE /api/users/{id}` - ユーザー削除
//!
//! リクエストボディに含まれる `id` などの未知フィールドは無視する。
//! ID は作成時にサービスが採番し、更新時はパスの値を使う。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use restdemo_domain::user::{User, UserId};
use serde::{Deserialize, Serialize};

use crate::{
    error::ApiError,
    usecase::{UserInput, UserService},
};

/// 削除成功時の応答本文
pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";

/// ユーザー API の共有状態
pub struct UserState {
    pub service: Arc<dyn UserService>,
}

// --- リクエスト/レスポンス型 ---

/// ユーザー作成・更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name:  String,
    pub email: String,
}

impl From<UserRequest> for UserInput {
    fn from(req: UserRequest) -> Self {
        Self {
            name:  req.name,
            email: req.email,
        }
    }
}

/// ユーザー DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id:         String,
    pub name:       String,
    pub email:      String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id:         user.id().as_str().to_string(),
            name:       user.name().as_str().to_string(),
            email:      user.email().as_str().to_string(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().to_rfc3339(),
        }
    }
}

// --- ハンドラ ---

/// POST /api/users
pub async fn create_user(
    State(state): State<Arc<UserState>>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let Json(req) = payload?;

    let user = state.service.create_user(req.into()).await?;

    Ok(Json(UserDto::from(&user)))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<Arc<UserState>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.service.get_all_users().await?;

    Ok(Json(users.iter().map(UserDto::from).collect()))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .service
        .get_user_by_id(&UserId::from_string(id))
        .await?;

    Ok(Json(UserDto::from(&user)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserDto>, ApiError> {
    let Json(req) = payload?;

    let user = state
        .service
        .update_user(&UserId::from_string(id), req.into())
        .await?;

    Ok(Json(UserDto::from(&user)))
}

/// DELETE /api/users/{id}
///
/// 成功時は `text/plain` の固定文字列を返す。
pub async fn delete_user(
    State(state): State<Arc<UserState>>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    state.service.delete_user(&UserId::from_string(id)).await?;

    Ok(USER_DELETED_MESSAGE)
}
