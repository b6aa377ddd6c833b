use catalog::database::Result;
use model::{fishery::Fishery, lake::Lake, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{lake::LakeRow, with_id, with_ids};

use super::{convert_error, expect_row_touched};

const COLUMNS: &str =
    "id, fishery_id, name, species, size_acres, max_depth_feet, peg_count, notes";

pub async fn get<'c, E>(executor: E, id: Id<Lake>) -> Result<WithId<Lake>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM lakes WHERE id = $1;"))
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map_err(convert_error)
        .map(|row: LakeRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Lake>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM lakes ORDER BY name;"))
        .fetch_all(executor)
        .await
        .map_err(convert_error)?
        .let_owned(|rows: Vec<LakeRow>| Ok(with_ids(rows)))
}

pub async fn for_fishery<'c, E>(
    executor: E,
    fishery_id: &Id<Fishery>,
) -> Result<Vec<WithId<Lake>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM lakes WHERE fishery_id = $1 ORDER BY name;"
    ))
    .bind(fishery_id.raw())
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<LakeRow>| Ok(with_ids(rows)))
}

pub async fn insert<'c, E>(executor: E, lake: Lake) -> Result<WithId<Lake>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        INSERT INTO lakes(
            fishery_id, name, species, size_acres, max_depth_feet, peg_count, notes
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING {COLUMNS};
        "
    ))
    .bind(lake.fishery_id.raw())
    .bind(&lake.name)
    .bind(&lake.species)
    .bind(lake.size_acres)
    .bind(lake.max_depth_feet)
    .bind(lake.peg_count)
    .bind(&lake.notes)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: LakeRow| with_id(row))
}

pub async fn update<'c, E>(executor: E, lake: WithId<Lake>) -> Result<WithId<Lake>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "
        UPDATE lakes
        SET fishery_id = $1,
            name = $2,
            species = $3,
            size_acres = $4,
            max_depth_feet = $5,
            peg_count = $6,
            notes = $7
        WHERE id = $8
        RETURNING {COLUMNS};
        "
    ))
    .bind(lake.content.fishery_id.raw())
    .bind(&lake.content.name)
    .bind(&lake.content.species)
    .bind(lake.content.size_acres)
    .bind(lake.content.max_depth_feet)
    .bind(lake.content.peg_count)
    .bind(&lake.content.notes)
    .bind(lake.id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: LakeRow| with_id(row))
}

pub async fn delete<'c, E>(executor: E, id: Id<Lake>) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM lakes WHERE id = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map_err(convert_error)
        .and_then(expect_row_touched)
}

pub async fn exists<'c, E>(executor: E, id: Id<Lake>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM lakes WHERE id = $1);")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
