//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックはユースケース層に委譲
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs          # 親モジュール（re-export）
//! └── handler/
//!     ├── health.rs   # ヘルスチェック
//!     ├── hello.rs    # ルートパスの挨拶
//!     └── user.rs     # ユーザー CRUD
//! ```

pub mod health;
pub mod hello;
pub mod user;

pub use health::health_check;
pub use hello::hello;
pub use user::{UserState, create_user, delete_user, get_user, list_users, update_user};
