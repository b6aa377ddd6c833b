use catalog::database::Result;
use model::{tackle_shop::TackleShop, WithId};
use sqlx::{types::Json, Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{tackle_shop::TackleShopRow, with_id, with_ids};

use super::{convert_error, expect_row_touched};

const COLUMNS: &str = "
    id, slug, name, address, postcode, phone, email, website,
    brands, opening_hours, latitude, longitude
";

pub async fn get<'c, E>(executor: E, id: Id<TackleShop>) -> Result<WithId<TackleShop>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM tackle_shops WHERE id = $1;"
    ))
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: TackleShopRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<TackleShop>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM tackle_shops ORDER BY name;"
    ))
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<TackleShopRow>| Ok(with_ids(rows)))
}

pub async fn by_slug<'c, E, S>(executor: E, slug: S) -> Result<WithId<TackleShop>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM tackle_shops WHERE slug = $1;"
    ))
    .bind(slug.into())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: TackleShopRow| with_id(row))
}

pub async fn insert<'c, E>(executor: E, shop: TackleShop) -> Result<WithId<TackleShop>>
where
    E: Executor<'c, Database = Postgres>,
{
    let location = shop.location;
    sqlx::query_as(&format!(
        "
        INSERT INTO tackle_shops(
            slug, name, address, postcode, phone, email, website,
            brands, opening_hours, latitude, longitude
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {COLUMNS};
        "
    ))
    .bind(&shop.slug)
    .bind(&shop.name)
    .bind(&shop.address)
    .bind(&shop.postcode)
    .bind(&shop.phone)
    .bind(&shop.email)
    .bind(&shop.website)
    .bind(&shop.brands)
    .bind(Json(&shop.opening_hours))
    .bind(location.as_ref().map(|location| location.latitude))
    .bind(location.as_ref().map(|location| location.longitude))
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: TackleShopRow| with_id(row))
}

pub async fn update<'c, E>(
    executor: E,
    shop: WithId<TackleShop>,
) -> Result<WithId<TackleShop>>
where
    E: Executor<'c, Database = Postgres>,
{
    let id = shop.id;
    let shop = shop.content;
    let location = shop.location;
    sqlx::query_as(&format!(
        "
        UPDATE tackle_shops
        SET slug = $1,
            name = $2,
            address = $3,
            postcode = $4,
            phone = $5,
            email = $6,
            website = $7,
            brands = $8,
            opening_hours = $9,
            latitude = $10,
            longitude = $11
        WHERE id = $12
        RETURNING {COLUMNS};
        "
    ))
    .bind(&shop.slug)
    .bind(&shop.name)
    .bind(&shop.address)
    .bind(&shop.postcode)
    .bind(&shop.phone)
    .bind(&shop.email)
    .bind(&shop.website)
    .bind(&shop.brands)
    .bind(Json(&shop.opening_hours))
    .bind(location.as_ref().map(|location| location.latitude))
    .bind(location.as_ref().map(|location| location.longitude))
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: TackleShopRow| with_id(row))
}

pub async fn delete<'c, E>(executor: E, id: Id<TackleShop>) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM tackle_shops WHERE id = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map_err(convert_error)
        .and_then(expect_row_touched)
}

pub async fn exists<'c, E>(executor: E, id: Id<TackleShop>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM tackle_shops WHERE id = $1);")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
