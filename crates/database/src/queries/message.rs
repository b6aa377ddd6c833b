use catalog::database::Result;
use model::{message::Message, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{message::MessageRow, with_id, with_ids};

use super::{convert_error, expect_row_touched};

const COLUMNS: &str = "id, name, email, subject, body, read, created_at";

pub async fn get<'c, E>(executor: E, id: Id<Message>) -> Result<WithId<Message>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM messages WHERE id = $1;"))
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map_err(convert_error)
        .map(|row: MessageRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Message>>>
where
    E: Executor<'c, Database = Postgres>,
{
    // inbox order, newest first
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM messages ORDER BY created_at DESC;"
    ))
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<MessageRow>| Ok(with_ids(rows)))
}

pub async fn insert<'c, E>(executor: E, message: Message) -> Result<WithId<Message>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        INSERT INTO messages(name, email, subject, body, read, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS};
        "
    ))
    .bind(&message.name)
    .bind(&message.email)
    .bind(&message.subject)
    .bind(&message.body)
    .bind(message.read)
    .bind(message.created_at)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: MessageRow| with_id(row))
}

pub async fn update<'c, E>(
    executor: E,
    message: WithId<Message>,
) -> Result<WithId<Message>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        UPDATE messages
        SET name = $1,
            email = $2,
            subject = $3,
            body = $4,
            read = $5,
            created_at = $6
        WHERE id = $7
        RETURNING {COLUMNS};
        "
    ))
    .bind(&message.content.name)
    .bind(&message.content.email)
    .bind(&message.content.subject)
    .bind(&message.content.body)
    .bind(message.content.read)
    .bind(message.content.created_at)
    .bind(message.id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: MessageRow| with_id(row))
}

pub async fn set_read<'c, E>(
    executor: E,
    id: Id<Message>,
    read: bool,
) -> Result<WithId<Message>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "UPDATE messages SET read = $1 WHERE id = $2 RETURNING {COLUMNS};"
    ))
    .bind(read)
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: MessageRow| with_id(row))
}

pub async fn delete<'c, E>(executor: E, id: Id<Message>) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM messages WHERE id = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map_err(convert_error)
        .and_then(expect_row_touched)
}

pub async fn exists<'c, E>(executor: E, id: Id<Message>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM messages WHERE id = $1);")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
