//! # ヘルスチェックハンドラ
//!
//! アプリケーションの稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /health
//! ```
//!
//! リポジトリへの接続は確認せず、プロセスが応答できることのみを返す。

use axum::Json;
use restdemo_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。
///
/// ```text
/// $ curl http://localhost:8080/health
/// {"status":"healthy","version":"0.1.0"}
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
