//! # UserRepository
//!
//! ユーザー情報の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **トレイトで抽象化**: ユースケース層は `Arc<dyn UserRepository>` として保持する
//! - **一覧の並び順**: 作成日時の昇順（同時刻は ID 順）で返す
//! - **存在しない ID**: 更新・削除は `Ok(false)` を返し、エラーにはしない

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use restdemo_domain::{
    user::{Email, User, UserId},
    value_objects::UserName,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// ユーザーリポジトリトレイト
///
/// ユーザー情報の永続化操作を定義する。
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// ユーザーを追加する
    async fn insert(&self, user: &User) -> Result<(), InfraError>;

    /// 全ユーザーを作成順に取得する
    async fn find_all(&self) -> Result<Vec<User>, InfraError>;

    /// ID でユーザーを検索する
    ///
    /// # 戻り値
    ///
    /// - `Ok(Some(user))`: ユーザーが見つかった場合
    /// - `Ok(None)`: ユーザーが見つからない場合
    /// - `Err(_)`: データベースエラー
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError>;

    /// ユーザーを更新する
    ///
    /// 対象が存在しない場合は `Ok(false)` を返す。
    async fn update(&self, user: &User) -> Result<bool, InfraError>;

    /// ユーザーを削除する
    ///
    /// 対象が存在しない場合は `Ok(false)` を返す。
    async fn delete(&self, id: &UserId) -> Result<bool, InfraError>;
}

/// users テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id:         String,
    name:       String,
    email:      String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = InfraError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User::from_db(
            UserId::from_string(row.id),
            UserName::new(row.name).map_err(|e| InfraError::unexpected(e.to_string()))?,
            Email::new(row.email).map_err(|e| InfraError::unexpected(e.to_string()))?,
            row.created_at,
            row.updated_at,
        ))
    }
}

/// PostgreSQL 実装の UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(id = %user.id()))]
    async fn insert(&self, user: &User) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.name().as_str())
        .bind(user.email().as_str())
        .bind(user.created_at())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(User::try_from).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %user.id()))]
    async fn update(&self, user: &User) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = $2, email = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(user.id().as_str())
        .bind(user.name().as_str())
        .bind(user.email().as_str())
        .bind(user.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: &UserId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
