//! # ユースケース層
//!
//! API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時刻プロバイダを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `user`: ユーザー CRUD のユースケース

pub mod user;

pub use user::{UserInput, UserService, UserServiceImpl};
