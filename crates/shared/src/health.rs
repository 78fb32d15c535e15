//! # ヘルスチェック共通型
//!
//! ヘルスチェックエンドポイントが返すレスポンス型を提供する。

use serde::{Deserialize, Serialize};

/// ヘルスチェックで返す稼働状態の値
const STATUS_HEALTHY: &str = "healthy";

/// ヘルスチェックレスポンス
///
/// `status` はサービスの稼働状態、`version` は Cargo.toml のバージョンを示す。
///
/// ## 使用例
///
/// ```
/// use restdemo_shared::HealthResponse;
///
/// let response = HealthResponse::healthy("0.1.0");
/// assert_eq!(response.status, "healthy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 稼働状態（`"healthy"` または `"unhealthy"`）
    pub status:  String,
    /// アプリケーションバージョン（Cargo.toml から取得）
    pub version: String,
}

impl HealthResponse {
    /// 稼働中を表すレスポンスを作成する
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status:  STATUS_HEALTHY.to_string(),
            version: version.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_healthyでstatusとversionが設定される() {
        let response = HealthResponse::healthy("1.2.3");

        assert_eq!(response.status, "healthy");
        assert_eq!(response.version, "1.2.3");
    }

    #[test]
    fn test_health_responseのserializeで正しいjson形状にする() {
        let response = HealthResponse::healthy("0.1.0");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "healthy",
                "version": "0.1.0"
            })
        );
    }

    #[test]
    fn test_deserializeでunhealthyも読み取れる() {
        let json = r#"{"status": "unhealthy", "version": "0.1.0"}"#;
        let response: HealthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "unhealthy");
    }
}
