//! ユーザー管理ユースケース

use std::sync::Arc;

use async_trait::async_trait;
use restdemo_domain::{
    DomainError,
    clock::Clock,
    user::{Email, User, UserId},
    value_objects::UserName,
};
use restdemo_infra::repository::UserRepository;

use crate::error::ApiError;

/// ユーザー作成・更新の入力
///
/// 作成と更新（全体置換）で同じ形を使う。
#[derive(Debug, Clone)]
pub struct UserInput {
    pub name:  String,
    pub email: String,
}

impl UserInput {
    /// ドメインの値オブジェクトに変換する
    fn validate(self) -> Result<(UserName, Email), ApiError> {
        let name = UserName::new(self.name)?;
        let email = Email::new(self.email)?;
        Ok((name, email))
    }
}

/// ユーザー管理サービス
#[async_trait]
pub trait UserService: Send + Sync {
    /// ユーザーを作成する
    ///
    /// ID と作成日時・更新日時はサービスが採番する。
    async fn create_user(&self, input: UserInput) -> Result<User, ApiError>;

    /// 全ユーザーを作成順に取得する
    async fn get_all_users(&self) -> Result<Vec<User>, ApiError>;

    /// ID でユーザーを取得する
    async fn get_user_by_id(&self, id: &UserId) -> Result<User, ApiError>;

    /// ユーザーの名前とメールアドレスを置き換える
    async fn update_user(&self, id: &UserId, input: UserInput) -> Result<User, ApiError>;

    /// ユーザーを削除する
    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError>;
}

fn user_not_found(id: &UserId) -> DomainError {
    DomainError::NotFound {
        entity_type: "User",
        id:          id.to_string(),
    }
}

/// [`UserService`] の実装
pub struct UserServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    clock:           Arc<dyn Clock>,
}

impl UserServiceImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            user_repository,
            clock,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn create_user(&self, input: UserInput) -> Result<User, ApiError> {
        let (name, email) = input.validate()?;
        let user = User::new(UserId::new(), name, email, self.clock.now_micros());

        self.user_repository.insert(&user).await?;

        tracing::info!(user_id = %user.id(), "ユーザーを作成しました");
        Ok(user)
    }

    async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.user_repository.find_all().await?;
        tracing::debug!(count = users.len(), "ユーザー一覧を取得しました");
        Ok(users)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<User, ApiError> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id).into())
    }

    /// 1. 入力を検証
    /// 2. 既存ユーザーを取得（存在しなければ 404）
    /// 3. 名前とメールアドレスを置き換え、更新日時を進める
    async fn update_user(&self, id: &UserId, input: UserInput) -> Result<User, ApiError> {
        let (name, email) = input.validate()?;

        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))?;

        let user = user.with_profile(name, email, self.clock.now_micros());

        // 取得から更新までの間に削除された場合
        if !self.user_repository.update(&user).await? {
            return Err(user_not_found(id).into());
        }

        tracing::info!(user_id = %id, "ユーザーを更新しました");
        Ok(user)
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        if !self.user_repository.delete(id).await? {
            return Err(user_not_found(id).into());
        }

        tracing::info!(user_id = %id, "ユーザーを削除しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use restdemo_domain::clock::FixedClock;
    use restdemo_infra::repository::InMemoryUserRepository;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn sut_at(now: DateTime<Utc>) -> UserServiceImpl {
        UserServiceImpl::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(FixedClock::new(now)),
        )
    }

    fn input(name: &str, email: &str) -> UserInput {
        UserInput {
            name:  name.to_string(),
            email: email.to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_create_userは入力どおりのユーザーを返す(now: DateTime<Utc>) {
        let sut = sut_at(now);

        let user = sut
            .create_user(input("Alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(user.name().as_str(), "Alice");
        assert_eq!(user.email().as_str(), "alice@example.com");
        assert_eq!(user.created_at(), now);
        assert_eq!(user.updated_at(), now);
    }

    #[rstest]
    #[tokio::test]
    async fn test_作成したユーザーはidで取得できる(now: DateTime<Utc>) {
        let sut = sut_at(now);
        let created = sut
            .create_user(input("Alice", "alice@example.com"))
            .await
            .unwrap();

        let found = sut.get_user_by_id(created.id()).await.unwrap();

        assert_eq!(found, created);
    }

    #[rstest]
    #[case("", "alice@example.com")]
    #[case("Alice", "not-an-email")]
    #[tokio::test]
    async fn test_不正な入力はバリデーションエラーになり保存されない(
        now: DateTime<Utc>,
        #[case] name: &str,
        #[case] email: &str,
    ) {
        let sut = sut_at(now);

        let result = sut.create_user(input(name, email)).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(sut.get_all_users().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_all_usersは作成順に返す(now: DateTime<Utc>) {
        let sut = sut_at(now);
        let first = sut
            .create_user(input("Alice", "alice@example.com"))
            .await
            .unwrap();
        let second = sut
            .create_user(input("Bob", "bob@example.com"))
            .await
            .unwrap();

        let users = sut.get_all_users().await.unwrap();

        assert_eq!(users, vec![first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しないidの取得はnot_found(now: DateTime<Utc>) {
        let sut = sut_at(now);

        let result = sut.get_user_by_id(&UserId::from_string("missing")).await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_update_userは作成日時を保持し更新日時を進める(now: DateTime<Utc>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let creator = UserServiceImpl::new(repo.clone(), Arc::new(FixedClock::new(now)));
        let created = creator
            .create_user(input("Alice", "alice@example.com"))
            .await
            .unwrap();
        let later = now + chrono::Duration::minutes(5);
        let sut = UserServiceImpl::new(repo, Arc::new(FixedClock::new(later)));

        let updated = sut
            .update_user(created.id(), input("Alicia", "alicia@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.name().as_str(), "Alicia");
        assert_eq!(updated.email().as_str(), "alicia@example.com");
        assert_eq!(updated.created_at(), now);
        assert_eq!(updated.updated_at(), later);
        assert_eq!(sut.get_user_by_id(created.id()).await.unwrap(), updated);
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しないidの更新はnot_found(now: DateTime<Utc>) {
        let sut = sut_at(now);

        let result = sut
            .update_user(
                &UserId::from_string("missing"),
                input("Alice", "alice@example.com"),
            )
            .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn test_削除後は取得できず再削除はnot_found(now: DateTime<Utc>) {
        let sut = sut_at(now);
        let created = sut
            .create_user(input("Alice", "alice@example.com"))
            .await
            .unwrap();

        sut.delete_user(created.id()).await.unwrap();

        assert!(matches!(
            sut.get_user_by_id(created.id()).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(matches!(
            sut.delete_user(created.id()).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_作成日時と更新日時はマイクロ秒に切り詰められる() {
        let with_nanos = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let truncated = DateTime::from_timestamp(1_700_000_000, 123_456_000).unwrap();
        let repo = Arc::new(InMemoryUserRepository::new());
        let sut = UserServiceImpl::new(repo, Arc::new(FixedClock::new(with_nanos)));

        let created = sut
            .create_user(input("Alice", "alice@example.com"))
            .await
            .unwrap();
        let updated = sut
            .update_user(created.id(), input("Alicia", "alicia@example.com"))
            .await
            .unwrap();

        assert_eq!(created.created_at(), truncated);
        assert_eq!(created.updated_at(), truncated);
        assert_eq!(updated.created_at(), truncated);
        assert_eq!(updated.updated_at(), truncated);
    }

    #[rstest]
    #[tokio::test]
    async fn test_not_foundの詳細にユーザーidが含まれる(now: DateTime<Utc>) {
        let sut = sut_at(now);

        let result = sut.delete_user(&UserId::from_string("missing")).await;

        assert!(matches!(
            result,
            Err(ApiError::NotFound(msg)) if msg == "User が見つかりません: missing"
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn test_存在しないidへの不正な入力はバリデーションエラーを優先する(
        now: DateTime<Utc>,
    ) {
        let sut = sut_at(now);

        let result = sut
            .update_user(
                &UserId::from_string("missing"),
                input("", "alice@example.com"),
            )
            .await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}
