use async_trait::async_trait;
use catalog::database::{FisheryRepo, Repo, Result};
use model::{
    fishery::{Amenities, Fishery},
    Location, WithId,
};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::fishery::{
    by_slug, delete, exists, featured, fishery_of_the_week, get, get_all, insert,
    update,
};
use crate::PgDatabaseAutocommit;

use super::DatabaseRow;

/// The raw `fisheries` schema. Amenity flags and display flags are nullable
/// at rest; `to_model` is where they become concrete booleans, including the
/// derived `is_featured` and `has_accommodation`.
#[derive(Debug, Clone, FromRow)]
pub struct FisheryRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub image: Option<String>,
    pub district: Option<String>,
    pub species: Option<Vec<String>>,
    pub fishing_types: Option<Vec<String>>,
    pub booking_types: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub facilities: Option<Vec<String>>,
    pub day_ticket_price: Option<String>,
    pub wifi_signal: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub night_fishing: Option<bool>,
    pub match_fishing_friendly: Option<bool>,
    pub disabled_access: Option<bool>,
    pub dog_friendly: Option<bool>,
    pub fire_pits_allowed: Option<bool>,
    pub parking_close_to_pegs: Option<bool>,
    pub camping: Option<bool>,
    pub tackle_shop_on_site: Option<bool>,
    pub private_hire: Option<bool>,
    pub tackle_hire: Option<bool>,
    pub coaching: Option<bool>,
    pub keepnets_allowed: Option<bool>,
    pub twenty_four_hour_access: Option<bool>,
    pub guests_allowed: Option<bool>,
    pub under_18s_welcome: Option<bool>,
    pub accommodation_on_site: Option<bool>,
    pub featured: Option<bool>,
    pub fishery_of_the_week: Option<bool>,
}

impl DatabaseRow for FisheryRow {
    type Model = Fishery;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        // a location without both coordinates degrades to none; the address
        // alone is not enough to place a marker.
        let location = self.latitude.zip(self.longitude).map(|(latitude, longitude)| {
            Location {
                latitude,
                longitude,
                address: self.address,
            }
        });
        Fishery {
            slug: self.slug,
            name: self.name,
            description: self.description,
            rules: self.rules,
            image: self.image,
            district: self.district,
            species: self.species.unwrap_or_default(),
            fishing_types: self.fishing_types.unwrap_or_default(),
            booking_types: self.booking_types.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            facilities: self.facilities.unwrap_or_default(),
            day_ticket_price: self.day_ticket_price,
            wifi_signal: self.wifi_signal,
            phone: self.phone,
            email: self.email,
            website: self.website,
            location,
            amenities: Amenities {
                night_fishing: self.night_fishing.unwrap_or_default(),
                match_fishing_friendly: self.match_fishing_friendly.unwrap_or_default(),
                disabled_access: self.disabled_access.unwrap_or_default(),
                dog_friendly: self.dog_friendly.unwrap_or_default(),
                fire_pits_allowed: self.fire_pits_allowed.unwrap_or_default(),
                parking_close_to_pegs: self.parking_close_to_pegs.unwrap_or_default(),
                camping: self.camping.unwrap_or_default(),
                tackle_shop_on_site: self.tackle_shop_on_site.unwrap_or_default(),
                private_hire: self.private_hire.unwrap_or_default(),
                tackle_hire: self.tackle_hire.unwrap_or_default(),
                coaching: self.coaching.unwrap_or_default(),
                keepnets_allowed: self.keepnets_allowed.unwrap_or_default(),
                twenty_four_hour_access: self.twenty_four_hour_access.unwrap_or_default(),
                guests_allowed: self.guests_allowed.unwrap_or_default(),
                under_18s_welcome: self.under_18s_welcome.unwrap_or_default(),
            },
            is_featured: self.featured.unwrap_or_default(),
            is_fishery_of_the_week: self.fishery_of_the_week.unwrap_or_default(),
            has_accommodation: self.accommodation_on_site.unwrap_or_default(),
        }
    }
}

// Repo

#[async_trait]
impl Repo<Fishery> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Fishery>) -> Result<WithId<Fishery>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Fishery>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Fishery) -> Result<WithId<Fishery>> {
        insert(&self.pool, element).await
    }

    async fn update(&mut self, element: WithId<Fishery>) -> Result<WithId<Fishery>> {
        update(&self.pool, element).await
    }

    async fn delete(&mut self, id: Id<Fishery>) -> Result<()> {
        delete(&self.pool, id).await
    }

    async fn exists(&mut self, id: Id<Fishery>) -> Result<bool> {
        exists(&self.pool, id).await
    }
}

// Fishery Repo

#[async_trait]
impl FisheryRepo for PgDatabaseAutocommit {
    async fn fishery_by_slug<S: Into<String> + Send>(
        &mut self,
        slug: S,
    ) -> Result<WithId<Fishery>> {
        by_slug(&self.pool, slug).await
    }

    async fn featured_fisheries(&mut self) -> Result<Vec<WithId<Fishery>>> {
        featured(&self.pool).await
    }

    async fn fishery_of_the_week(&mut self) -> Result<WithId<Fishery>> {
        fishery_of_the_week(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_row() -> FisheryRow {
        FisheryRow {
            id: "f1".to_owned(),
            slug: "mill-pond".to_owned(),
            name: "Mill Pond".to_owned(),
            description: None,
            rules: None,
            image: None,
            district: None,
            species: None,
            fishing_types: None,
            booking_types: None,
            features: None,
            facilities: None,
            day_ticket_price: None,
            wifi_signal: None,
            phone: None,
            email: None,
            website: None,
            latitude: None,
            longitude: None,
            address: None,
            night_fishing: None,
            match_fishing_friendly: None,
            disabled_access: None,
            dog_friendly: None,
            fire_pits_allowed: None,
            parking_close_to_pegs: None,
            camping: None,
            tackle_shop_on_site: None,
            private_hire: None,
            tackle_hire: None,
            coaching: None,
            keepnets_allowed: None,
            twenty_four_hour_access: None,
            guests_allowed: None,
            under_18s_welcome: None,
            accommodation_on_site: None,
            featured: None,
            fishery_of_the_week: None,
        }
    }

    #[test]
    fn null_flags_coerce_to_false() {
        let fishery = bare_row().to_model();
        assert!(!fishery.is_featured);
        assert!(!fishery.has_accommodation);
        assert!(!fishery.amenities.night_fishing);
        assert!(fishery.species.is_empty());
    }

    #[test]
    fn set_flags_survive_coercion() {
        let mut row = bare_row();
        row.featured = Some(true);
        row.accommodation_on_site = Some(true);
        row.dog_friendly = Some(true);
        let fishery = row.to_model();
        assert!(fishery.is_featured);
        assert!(fishery.has_accommodation);
        assert!(fishery.amenities.dog_friendly);
    }

    #[test]
    fn location_requires_both_coordinates() {
        let mut row = bare_row();
        row.latitude = Some(51.2);
        row.address = Some("Mill Lane".to_owned());
        assert!(row.clone().to_model().location.is_none());

        row.longitude = Some(0.7);
        let location = row.to_model().location.unwrap();
        assert_eq!(location.latitude, 51.2);
        assert_eq!(location.address.as_deref(), Some("Mill Lane"));
    }
}
