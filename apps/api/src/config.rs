//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8080` | ポート番号 |
//! | `DATABASE_URL` | No | - | PostgreSQL 接続 URL（未設定時はインメモリで動作） |
//!
//! ログ関連（`LOG_FORMAT`, `RUST_LOG`）は `restdemo_shared::observability` が読み込む。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8080;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値の形式が不正
    #[error("環境変数 {name} の値が不正です: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:         String,
    /// ポート番号
    pub port:         u16,
    /// PostgreSQL 接続 URL
    pub database_url: Option<String>,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    ///
    /// テストではプロセスの環境変数を汚さずに検証するために使う。
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("API_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "API_PORT",
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
        })
    }

    /// バインドアドレス（`host:port`）
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
