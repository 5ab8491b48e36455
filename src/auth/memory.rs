use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::{
    repo::UserStore,
    repo_types::{NewUser, User},
};

/// In-process user store keyed by email. Used with `USER_STORE=memory` and in tests.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HashMap<String, User>>> {
        self.users
            .lock()
            .map_err(|_| anyhow::anyhow!("user store mutex poisoned"))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert_if_absent(&self, user: NewUser) -> anyhow::Result<Option<User>> {
        let mut users = self.lock()?;
        if users.contains_key(&user.email) {
            return Ok(None);
        }
        let record = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: OffsetDateTime::now_utc(),
        };
        users.insert(record.email.clone(), record.clone());
        Ok(Some(record))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        Ok(self.lock()?.get(email).cloned())
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(self.lock()?.len() as i64)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.lock().map(|_| ())
    }
}
