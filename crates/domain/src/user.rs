//! # ユーザー
//!
//! ユーザーエンティティとそれに関連する値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: UserId は文字列をラップし、型安全性を確保
//! - **不変性**: エンティティフィールドは基本的に不変、変更はメソッド経由
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use restdemo_domain::{
//!     user::{Email, User, UserId},
//!     value_objects::UserName,
//! };
//!
//! let user = User::new(
//!     UserId::new(),
//!     UserName::new("山田太郎")?,
//!     Email::new("yamada@example.com")?,
//!     chrono::Utc::now(),
//! );
//!
//! assert_eq!(user.created_at(), user.updated_at());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DomainError, value_objects::UserName};

/// ユーザー ID（一意識別子）
///
/// 新規作成時は UUID v7 の文字列表現を採番する（生成順にソート可能）。
/// パスパラメータから受け取る値は任意の文字列をそのまま検索キーとして扱う。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct UserId(String);

impl UserId {
    /// 新しいユーザー ID を生成する
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// 既存の文字列からユーザー ID を作成する
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// メールアドレス（値オブジェクト）
///
/// `local@domain` の形式を要求する。
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// 最大バイト長
    pub const MAX_LENGTH: usize = 255;

    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 前後の空白は除去される
    /// - 空文字列ではない
    /// - `@` を含み、その前後が空でない
    /// - 最大 255 バイト
    ///
    /// # エラー
    ///
    /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスは必須です".to_string(),
            ));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        };

        if local.is_empty() || domain.is_empty() {
            return Err(DomainError::Validation(
                "メールアドレスの形式が不正です".to_string(),
            ));
        }

        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::Validation(format!(
                "メールアドレスは{}バイト以内である必要があります",
                Self::MAX_LENGTH
            )));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ユーザーエンティティ
///
/// # 不変条件
///
/// - `id` は作成後に変わらない
/// - `created_at` は作成後に変わらない
/// - `updated_at >= created_at`（呼び出し元が単調な時刻を渡す前提）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id:         UserId,
    name:       UserName,
    email:      Email,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// 新しいユーザーを作成する
    ///
    /// `now` は作成日時・更新日時の両方に設定される。
    pub fn new(id: UserId, name: UserName, email: Email, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// 既存のデータからユーザーを復元する（データベースから取得時）
    pub fn from_db(
        id: UserId,
        name: UserName,
        email: Email,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
            updated_at,
        }
    }

    // Getter メソッド

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // ビジネスロジックメソッド

    /// 名前とメールアドレスを置き換えた新しいインスタンスを返す
    ///
    /// PUT による全体置換に対応する。ID と作成日時は保持される。
    pub fn with_profile(self, name: UserName, email: Email, now: DateTime<Utc>) -> Self {
        Self {
            name,
            email,
            updated_at: now,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use super::*;

    // フィクスチャ

    /// テスト用の固定タイムスタンプ
    #[fixture]
    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[fixture]
    fn user(now: DateTime<Utc>) -> User {
        User::new(
            UserId::from_string("user-1"),
            UserName::new("Test User").unwrap(),
            Email::new("user@example.com").unwrap(),
            now,
        )
    }

    // UserId のテスト

    #[test]
    fn test_新規ユーザーidはuuid_v7形式() {
        let id = UserId::new();

        let uuid = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(uuid.get_version(), Some(uuid::Version::SortRand));
    }

    #[test]
    fn test_新規ユーザーidは生成のたびに異なる() {
        assert_ne!(UserId::new(), UserId::new());
    }

    #[test]
    fn test_from_stringは任意の文字列をそのまま保持する() {
        let id = UserId::from_string("not-a-uuid");

        assert_eq!(id.as_str(), "not-a-uuid");
        assert_eq!(id.to_string(), "not-a-uuid");
    }

    // Email のテスト

    #[test]
    fn test_メールアドレスは正常な形式を受け入れる() {
        assert!(Email::new("user@example.com").is_ok());
    }

    #[test]
    fn test_メールアドレスは前後の空白を除去する() {
        let email = Email::new(" user@example.com ").unwrap();

        assert_eq!(email.as_str(), "user@example.com");
    }

    #[rstest]
    #[case("", "空文字列")]
    #[case("no-at-sign", "@記号なし")]
    #[case("@", "@のみ")]
    #[case("@example.com", "ローカル部分が空")]
    #[case("user@", "ドメイン部分が空")]
    #[case(&format!("{}@example.com", "a".repeat(256)), "255バイト超過")]
    fn test_メールアドレスは不正な形式を拒否する(
        #[case] input: &str,
        #[case] _reason: &str,
    ) {
        assert!(Email::new(input).is_err());
    }

    // User のテスト

    #[rstest]
    fn test_新規ユーザーは作成日時と更新日時が等しい(user: User, now: DateTime<Utc>) {
        assert_eq!(user.created_at(), now);
        assert_eq!(user.updated_at(), now);
    }

    #[rstest]
    fn test_with_profileで名前とメールが置き換わる(user: User, now: DateTime<Utc>) {
        let later = now + chrono::Duration::seconds(60);

        let updated = user.clone().with_profile(
            UserName::new("Renamed").unwrap(),
            Email::new("renamed@example.com").unwrap(),
            later,
        );

        assert_eq!(updated.id(), user.id());
        assert_eq!(updated.name().as_str(), "Renamed");
        assert_eq!(updated.email().as_str(), "renamed@example.com");
        assert_eq!(updated.created_at(), now);
        assert_eq!(updated.updated_at(), later);
    }

    #[rstest]
    fn test_from_dbで全フィールドが復元される(now: DateTime<Utc>) {
        let updated_at = now + chrono::Duration::hours(1);

        let user = User::from_db(
            UserId::from_string("user-9"),
            UserName::new("Restored").unwrap(),
            Email::new("restored@example.com").unwrap(),
            now,
            updated_at,
        );

        assert_eq!(user.id().as_str(), "user-9");
        assert_eq!(user.name().as_str(), "Restored");
        assert_eq!(user.email().as_str(), "restored@example.com");
        assert_eq!(user.created_at(), now);
        assert_eq!(user.updated_at(), updated_at);
    }
}
