//! # RestDemo API サーバー
//!
//! ルートパスの挨拶と、`/api/users` 配下のユーザー CRUD API を提供する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! Router ──▶ handler ──▶ UserService ──▶ UserRepository
//!                        (usecase)       (InMemory / PostgreSQL)
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State の組み立てとルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`usecase`] - ユーザー管理のビジネスロジック
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use restdemo_api::app_builder::{build_app, build_user_state};
//! use restdemo_domain::clock::SystemClock;
//! use restdemo_infra::repository::InMemoryUserRepository;
//!
//! let state = build_user_state(
//!     Arc::new(InMemoryUserRepository::new()),
//!     Arc::new(SystemClock),
//! );
//! let app = build_app(state);
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
