use catalog::database::Result;
use model::{fishery::Fishery, WithId};
use sqlx::{Executor, Postgres};
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{fishery::FisheryRow, with_id, with_ids};

use super::{convert_error, expect_row_touched};

const COLUMNS: &str = "
    id, slug, name, description, rules, image, district,
    species, fishing_types, booking_types, features, facilities,
    day_ticket_price, wifi_signal, phone, email, website,
    latitude, longitude, address,
    night_fishing, match_fishing_friendly, disabled_access, dog_friendly,
    fire_pits_allowed, parking_close_to_pegs, camping, tackle_shop_on_site,
    private_hire, tackle_hire, coaching, keepnets_allowed,
    twenty_four_hour_access, guests_allowed, under_18s_welcome,
    accommodation_on_site, featured, fishery_of_the_week
";

pub async fn get<'c, E>(executor: E, id: Id<Fishery>) -> Result<WithId<Fishery>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM fisheries WHERE id = $1;"
    ))
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: FisheryRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Fishery>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM fisheries ORDER BY name;"
    ))
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<FisheryRow>| Ok(with_ids(rows)))
}

pub async fn by_slug<'c, E, S>(executor: E, slug: S) -> Result<WithId<Fishery>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM fisheries WHERE slug = $1;"
    ))
    .bind(slug.into())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: FisheryRow| with_id(row))
}

pub async fn featured<'c, E>(executor: E) -> Result<Vec<WithId<Fishery>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM fisheries WHERE featured ORDER BY name;"
    ))
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|rows: Vec<FisheryRow>| Ok(with_ids(rows)))
}

pub async fn fishery_of_the_week<'c, E>(executor: E) -> Result<WithId<Fishery>>
where
    E: Executor<'c, Database = Postgres>,
{
    // the flag is maintained manually; if several rows carry it, the
    // alphabetically first wins rather than erroring.
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM fisheries WHERE fishery_of_the_week ORDER BY name LIMIT 1;"
    ))
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: FisheryRow| with_id(row))
}

pub async fn insert<'c, E>(executor: E, fishery: Fishery) -> Result<WithId<Fishery>>
where
    E: Executor<'c, Database = Postgres>,
{
    let location = fishery.location;
    let amenities = fishery.amenities;
    sqlx::query_as(&format!(
        "
        INSERT INTO fisheries(
            slug, name, description, rules, image, district,
            species, fishing_types, booking_types, features, facilities,
            day_ticket_price, wifi_signal, phone, email, website,
            latitude, longitude, address,
            night_fishing, match_fishing_friendly, disabled_access, dog_friendly,
            fire_pits_allowed, parking_close_to_pegs, camping, tackle_shop_on_site,
            private_hire, tackle_hire, coaching, keepnets_allowed,
            twenty_four_hour_access, guests_allowed, under_18s_welcome,
            accommodation_on_site, featured, fishery_of_the_week
        )
        VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
            $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26,
            $27, $28, $29, $30, $31, $32, $33, $34, $35, $36, $37
        )
        RETURNING {COLUMNS};
        "
    ))
    .bind(&fishery.slug)
    .bind(&fishery.name)
    .bind(&fishery.description)
    .bind(&fishery.rules)
    .bind(&fishery.image)
    .bind(&fishery.district)
    .bind(&fishery.species)
    .bind(&fishery.fishing_types)
    .bind(&fishery.booking_types)
    .bind(&fishery.features)
    .bind(&fishery.facilities)
    .bind(&fishery.day_ticket_price)
    .bind(&fishery.wifi_signal)
    .bind(&fishery.phone)
    .bind(&fishery.email)
    .bind(&fishery.website)
    .bind(location.as_ref().map(|location| location.latitude))
    .bind(location.as_ref().map(|location| location.longitude))
    .bind(location.as_ref().and_then(|location| location.address.clone()))
    .bind(amenities.night_fishing)
    .bind(amenities.match_fishing_friendly)
    .bind(amenities.disabled_access)
    .bind(amenities.dog_friendly)
    .bind(amenities.fire_pits_allowed)
    .bind(amenities.parking_close_to_pegs)
    .bind(amenities.camping)
    .bind(amenities.tackle_shop_on_site)
    .bind(amenities.private_hire)
    .bind(amenities.tackle_hire)
    .bind(amenities.coaching)
    .bind(amenities.keepnets_allowed)
    .bind(amenities.twenty_four_hour_access)
    .bind(amenities.guests_allowed)
    .bind(amenities.under_18s_welcome)
    .bind(fishery.has_accommodation)
    .bind(fishery.is_featured)
    .bind(fishery.is_fishery_of_the_week)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: FisheryRow| with_id(row))
}

pub async fn update<'c, E>(
    executor: E,
    fishery: WithId<Fishery>,
) -> Result<WithId<Fishery>>
where
    E: Executor<'c, Database = Postgres>,
{
    let id = fishery.id;
    let fishery = fishery.content;
    let location = fishery.location;
    let amenities = fishery.amenities;
    sqlx::query_as(&format!(
        "
        UPDATE fisheries
        SET slug = $1,
            name = $2,
            description = $3,
            rules = $4,
            image = $5,
            district = $6,
            species = $7,
            fishing_types = $8,
            booking_types = $9,
            features = $10,
            facilities = $11,
            day_ticket_price = $12,
            wifi_signal = $13,
            phone = $14,
            email = $15,
            website = $16,
            latitude = $17,
            longitude = $18,
            address = $19,
            night_fishing = $20,
            match_fishing_friendly = $21,
            disabled_access = $22,
            dog_friendly = $23,
            fire_pits_allowed = $24,
            parking_close_to_pegs = $25,
            camping = $26,
            tackle_shop_on_site = $27,
            private_hire = $28,
            tackle_hire = $29,
            coaching = $30,
            keepnets_allowed = $31,
            twenty_four_hour_access = $32,
            guests_allowed = $33,
            under_18s_welcome = $34,
            accommodation_on_site = $35,
            featured = $36,
            fishery_of_the_week = $37
        WHERE id = $38
        RETURNING {COLUMNS};
        "
    ))
    .bind(&fishery.slug)
    .bind(&fishery.name)
    .bind(&fishery.description)
    .bind(&fishery.rules)
    .bind(&fishery.image)
    .bind(&fishery.district)
    .bind(&fishery.species)
    .bind(&fishery.fishing_types)
    .bind(&fishery.booking_types)
    .bind(&fishery.features)
    .bind(&fishery.facilities)
    .bind(&fishery.day_ticket_price)
    .bind(&fishery.wifi_signal)
    .bind(&fishery.phone)
    .bind(&fishery.email)
    .bind(&fishery.website)
    .bind(location.as_ref().map(|location| location.latitude))
    .bind(location.as_ref().map(|location| location.longitude))
    .bind(location.as_ref().and_then(|location| location.address.clone()))
    .bind(amenities.night_fishing)
    .bind(amenities.match_fishing_friendly)
    .bind(amenities.disabled_access)
    .bind(amenities.dog_friendly)
    .bind(amenities.fire_pits_allowed)
    .bind(amenities.parking_close_to_pegs)
    .bind(amenities.camping)
    .bind(amenities.tackle_shop_on_site)
    .bind(amenities.private_hire)
    .bind(amenities.tackle_hire)
    .bind(amenities.coaching)
    .bind(amenities.keepnets_allowed)
    .bind(amenities.twenty_four_hour_access)
    .bind(amenities.guests_allowed)
    .bind(amenities.under_18s_welcome)
    .bind(fishery.has_accommodation)
    .bind(fishery.is_featured)
    .bind(fishery.is_fishery_of_the_week)
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: FisheryRow| with_id(row))
}

pub async fn delete<'c, E>(executor: E, id: Id<Fishery>) -> Result<()>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query("DELETE FROM fisheries WHERE id = $1;")
        .bind(id.raw())
        .execute(executor)
        .await
        .map_err(convert_error)
        .and_then(expect_row_touched)
}

pub async fn exists<'c, E>(executor: E, id: Id<Fishery>) -> Result<bool>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM fisheries WHERE id = $1);")
        .bind(id.raw())
        .fetch_one(executor)
        .await
        .map_err(convert_error)
}
