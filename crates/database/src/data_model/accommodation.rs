use async_trait::async_trait;
use catalog::database::{AccommodationRepo, Repo, Result};
use model::{accommodation::Accommodation, fishery::Fishery, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::accommodation::{
    delete, exists, for_fishery, get, get_all, insert, update,
};
use crate::PgDatabaseAutocommit;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct AccommodationRow {
    pub id: String,
    pub fishery_id: String,
    pub name: String,
    pub accommodation_type: Option<String>,
    pub sleeps: Option<i32>,
    pub price_per_night: Option<f64>,
    pub notes: Option<String>,
}

impl DatabaseRow for AccommodationRow {
    type Model = Accommodation;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Accommodation {
            fishery_id: Id::new(self.fishery_id),
            name: self.name,
            accommodation_type: self.accommodation_type.unwrap_or_default(),
            sleeps: self.sleeps,
            price_per_night: self.price_per_night,
            notes: self.notes,
        }
    }
}

// Repo

#[async_trait]
impl Repo<Accommodation> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Accommodation>) -> Result<WithId<Accommodation>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Accommodation>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Accommodation) -> Result<WithId<Accommodation>> {
        insert(&self.pool, element).await
    }

    async fn update(
        &mut self,
        element: WithId<Accommodation>,
    ) -> Result<WithId<Accommodation>> {
        update(&self.pool, element).await
    }

    async fn delete(&mut self, id: Id<Accommodation>) -> Result<()> {
        delete(&self.pool, id).await
    }

    async fn exists(&mut self, id: Id<Accommodation>) -> Result<bool> {
        exists(&self.pool, id).await
    }
}

// Accommodation Repo

#[async_trait]
impl AccommodationRepo for PgDatabaseAutocommit {
    async fn accommodation_for_fishery(
        &mut self,
        fishery_id: &Id<Fishery>,
    ) -> Result<Vec<WithId<Accommodation>>> {
        for_fishery(&self.pool, fishery_id).await
    }
}
