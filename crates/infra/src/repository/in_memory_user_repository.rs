//! # InMemoryUserRepository
//!
//! プロセス内メモリにユーザーを保持するリポジトリ。
//! `DATABASE_URL` 未設定時のデフォルト実装で、テストでもそのまま利用する。
//!
//! 挿入順を保持するため `Vec` で管理する。ロックは `.await` をまたいで保持しない。

use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use restdemo_domain::user::{User, UserId};

use crate::{error::InfraError, repository::UserRepository};

/// インメモリ実装の UserRepository
///
/// `Clone` しても同じストレージを共有する。
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// ロックが poison された場合のエラー変換
fn poisoned<T>(_: PoisonError<T>) -> InfraError {
    InfraError::unexpected("ユーザーストアのロックが破損しています")
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), InfraError> {
        let mut users = self.users.write().map_err(poisoned)?;
        users.push(user.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, InfraError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn update(&self, user: &User) -> Result<bool, InfraError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let Some(slot) = users.iter_mut().find(|u| u.id() == user.id()) else {
            return Ok(false);
        };
        *slot = user.clone();
        Ok(true)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, InfraError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let before = users.len();
        users.retain(|u| u.id() != id);
        Ok(users.len() < before)
    }
}
