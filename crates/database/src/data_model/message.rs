use async_trait::async_trait;
use catalog::database::{MessageRepo, Repo, Result};
use chrono::{DateTime, Utc};
use model::{message::Message, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::message::{delete, exists, get, get_all, insert, set_read, update};
use crate::PgDatabaseAutocommit;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct MessageRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl DatabaseRow for MessageRow {
    type Model = Message;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Message {
            name: self.name,
            email: self.email,
            subject: self.subject,
            body: self.body,
            read: self.read,
            created_at: self.created_at,
        }
    }
}

// Repo

#[async_trait]
impl Repo<Message> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Message>) -> Result<WithId<Message>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Message>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Message) -> Result<WithId<Message>> {
        insert(&self.pool, element).await
    }

    async fn update(&mut self, element: WithId<Message>) -> Result<WithId<Message>> {
        update(&self.pool, element).await
    }

    async fn delete(&mut self, id: Id<Message>) -> Result<()> {
        delete(&self.pool, id).await
    }

    async fn exists(&mut self, id: Id<Message>) -> Result<bool> {
        exists(&self.pool, id).await
    }
}

// Message Repo

#[async_trait]
impl MessageRepo for PgDatabaseAutocommit {
    async fn set_message_read(
        &mut self,
        id: Id<Message>,
        read: bool,
    ) -> Result<WithId<Message>> {
        set_read(&self.pool, id, read).await
    }
}
