//! # リポジトリ実装
//!
//! ユーザーの永続化を抽象化するトレイトと、その具体的な実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **差し替え可能**: `DATABASE_URL` の有無で PostgreSQL / インメモリを切り替える
//! - **テスタビリティ**: インメモリ実装をそのままテストで使用できる

pub mod in_memory_user_repository;
pub mod user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
pub use user_repository::{PostgresUserRepository, UserRepository};
