//! # API エラー定義
//!
//! API 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーの階層
//!
//! ```text
//! DomainError（バリデーション・未検出）─┐
//! InfraError（DB・予期しないエラー）─┼─> ApiError ──IntoResponse──> StatusCode + Problem Details
//! JsonRejection（不正な JSON）   ─┘
//! ```
//!
//! 500 系のレスポンスには詳細を含めず、内容は `tracing::error!` でのみ出力する。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use restdemo_domain::DomainError;
use restdemo_infra::InfraError;
use restdemo_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 入力値がドメインのルールに違反している
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// リクエストボディを解釈できない
    #[error("不正なリクエスト: {0}")]
    BadRequest(String),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
            err @ DomainError::NotFound { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::NotFound(msg) => ErrorResponse::not_found(msg),
            ApiError::Validation(msg) => ErrorResponse::validation_error(msg),
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            ApiError::Database(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "データベースエラー"
                );
                ErrorResponse::internal_error()
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    async fn into_parts(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[rstest]
    #[case(
        ApiError::NotFound("ユーザーが見つかりません".to_string()),
        StatusCode::NOT_FOUND,
        "https://restdemo.example.com/errors/not-found"
    )]
    #[case(
        ApiError::Validation("ユーザー名は必須です".to_string()),
        StatusCode::BAD_REQUEST,
        "https://restdemo.example.com/errors/validation-error"
    )]
    #[case(
        ApiError::BadRequest("JSON が不正です".to_string()),
        StatusCode::BAD_REQUEST,
        "https://restdemo.example.com/errors/bad-request"
    )]
    #[case(
        ApiError::Database(InfraError::unexpected("壊れた行")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "https://restdemo.example.com/errors/internal-error"
    )]
    #[tokio::test]
    async fn test_エラー種別ごとのステータスとtype(
        #[case] err: ApiError,
        #[case] expected_status: StatusCode,
        #[case] expected_type: &str,
    ) {
        let (status, body) = into_parts(err).await;

        assert_eq!(status, expected_status);
        assert_eq!(body.error_type, expected_type);
        assert_eq!(body.status, expected_status.as_u16());
    }

    #[tokio::test]
    async fn test_データベースエラーは詳細を隠す() {
        let err = ApiError::from(InfraError::unexpected("connection refused"));

        let (status, body) = into_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.detail.contains("connection refused"));
    }

    #[test]
    fn test_ドメインのバリデーションエラーはvalidationに変換される() {
        let err = ApiError::from(DomainError::Validation("ユーザー名は必須です".to_string()));

        assert!(matches!(err, ApiError::Validation(msg) if msg == "ユーザー名は必須です"));
    }

    #[test]
    fn test_ドメインのnot_foundはnot_foundに変換される() {
        let err = ApiError::from(DomainError::NotFound {
            entity_type: "User",
            id:          "u1".to_string(),
        });

        assert!(matches!(err, ApiError::NotFound(msg) if msg == "User が見つかりません: u1"));
    }
}
