//! # RestDemo ドメイン層
//!
//! ユーザー管理のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`user::User`]）
//! - **値オブジェクト**: 生成時に検証される不変オブジェクト（[`user::Email`],
//!   [`value_objects::UserName`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`user`] - ユーザーエンティティと ID・メールアドレス
//! - [`value_objects`] - 共通値オブジェクト

#[macro_use]
mod macros;

pub mod clock;
pub mod error;
pub mod user;
pub mod value_objects;

pub use error::DomainError;
