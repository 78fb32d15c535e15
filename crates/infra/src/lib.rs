//! # RestDemo インフラ層
//!
//! 外部システムとの接続・永続化を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: ユーザーリポジトリのトレイトと具体実装
//!   （インメモリ / PostgreSQL）
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
