use catalog::{database::Result, session::Session};
use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use crate::data_model::session::SessionRow;

use super::convert_error;

const COLUMNS: &str = "token, created_at, expires_at";

pub async fn put<'c, E>(executor: E, session: Session) -> Result<Session>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        INSERT INTO sessions(token, created_at, expires_at)
        VALUES ($1, $2, $3)
        ON CONFLICT (token)
        DO UPDATE SET expires_at = EXCLUDED.expires_at
        RETURNING {COLUMNS};
        "
    ))
    .bind(&session.token)
    .bind(session.created_at)
    .bind(session.expires_at)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: SessionRow| row.to_model())
}

pub async fn get_by_token<'c, E>(executor: E, token: &str) -> Result<Option<Session>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM sessions WHERE token = $1;"
    ))
    .bind(token)
    .fetch_optional(executor)
    .await
    .map_err(convert_error)
    .map(|row: Option<SessionRow>| row.map(|row| row.to_model()))
}

pub async fn delete<'c, E>(executor: E, token: &str) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    // signing out an already-gone session is not an error
    sqlx::query("DELETE FROM sessions WHERE token = $1;")
        .bind(token)
        .execute(executor)
        .await
        .map_err(convert_error)
        .map(|_| ())
}

pub async fn delete_expired<'c, E>(executor: E, now: DateTime<Utc>) -> Result<u64>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM sessions WHERE expires_at <= $1;")
        .bind(now)
        .execute(executor)
        .await
        .map_err(convert_error)
        .map(|result| result.rows_affected())
}
