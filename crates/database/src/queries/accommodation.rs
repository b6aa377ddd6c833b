use catalog::database::Result;
use model::{accommodation::Accommodation, fishery::Fishery, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{accommodation::AccommodationRow, with_id, with_ids};

use super::{convert_error, expect_row_touched};

const COLUMNS: &str =
    "id, fishery_id, name, accommodation_type, sleeps, price_per_night, notes";

pub async fn get<'c, E>(
    executor: E,
    id: Id<Accommodation>,
) -> Result<WithId<Accommodation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM accommodation WHERE id = $1;"
    ))
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: AccommodationRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Accommodation>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM accommodation ORDER BY name;"
    ))
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<AccommodationRow>| Ok(with_ids(rows)))
}

pub async fn for_fishery<'c, E>(
    executor: E,
    fishery_id: &Id<Fishery>,
) -> Result<Vec<WithId<Accommodation>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM accommodation WHERE fishery_id = $1 ORDER BY name;"
    ))
    .bind(fishery_id.raw())
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<AccommodationRow>| Ok(with_ids(rows)))
}

pub async fn insert<'c, E>(
    executor: E,
    accommodation: Accommodation,
) -> Result<WithId<Accommodation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        INSERT INTO accommodation(
            fishery_id, name, accommodation_type, sleeps, price_per_night, notes
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {COLUMNS};
        "
    ))
    .bind(accommodation.fishery_id.raw())
    .bind(&accommodation.name)
    .bind(&accommodation.accommodation_type)
    .bind(accommodation.sleeps)
    .bind(accommodation.price_per_night)
    .bind(&accommodation.notes)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: AccommodationRow| with_id(row))
}

pub async fn update<'c, E>(
    executor: E,
    accommodation: WithId<Accommodation>,
) -> Result<WithId<Accommodation>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        UPDATE accommodation
        SET fishery_id = $1,
            name = $2,
            accommodation_type = $3,
            sleeps = $4,
            price_per_night = $5,
            notes = $6
        WHERE id = $7
        RETURNING {COLUMNS};
        "
    ))
    .bind(accommodation.content.fishery_id.raw())
    .bind(&accommodation.content.name)
    .bind(&accommodation.content.accommodation_type)
    .bind(accommodation.content.sleeps)
    .bind(accommodation.content.price_per_night)
    .bind(&accommodation.content.notes)
    .bind(accommodation.id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: AccommodationRow| with_id(row))
}

pub async fn delete<'c, E>(executor: E, id: Id<Accommodation>) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM accommodation WHERE id = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map_err(convert_error)
        .and_then(expect_row_touched)
}

pub async fn exists<'c, E>(executor: E, id: Id<Accommodation>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM accommodation WHERE id = $1);")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
