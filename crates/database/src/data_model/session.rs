use async_trait::async_trait;
use catalog::{
    database::{Result, SessionRepo},
    session::Session,
};
use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

use crate::queries::session::{delete, delete_expired, get_by_token, put};
use crate::PgDatabaseAutocommit;

#[derive(Debug, Clone, FromRow)]
pub struct SessionRow {
    pub token: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionRow {
    pub fn to_model(self) -> Session {
        Session {
            token: self.token,
            created_at: self.created_at,
            expires_at: self.expires_at,
        }
    }
}

#[async_trait]
impl SessionRepo for PgDatabaseAutocommit {
    async fn put_session(&mut self, session: Session) -> Result<Session> {
        put(&self.pool, session).await
    }

    async fn session_by_token(&mut self, token: &str) -> Result<Option<Session>> {
        get_by_token(&self.pool, token).await
    }

    async fn delete_session(&mut self, token: &str) -> Result<()> {
        delete(&self.pool, token).await
    }

    async fn delete_expired_sessions(&mut self, now: DateTime<Utc>) -> Result<u64> {
        delete_expired(&self.pool, now).await
    }
}
