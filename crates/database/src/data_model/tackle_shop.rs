use async_trait::async_trait;
use catalog::database::{Repo, Result, TackleShopRepo};
use indexmap::IndexMap;
use model::{tackle_shop::TackleShop, Location, WithId};
use sqlx::{prelude::FromRow, types::Json};
use utility::id::Id;

use crate::queries::tackle_shop::{by_slug, delete, exists, get, get_all, insert, update};
use crate::PgDatabaseAutocommit;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct TackleShopRow {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub brands: Option<Vec<String>>,
    pub opening_hours: Option<Json<IndexMap<String, String>>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl DatabaseRow for TackleShopRow {
    type Model = TackleShop;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        let location = self.latitude.zip(self.longitude).map(|(latitude, longitude)| {
            Location {
                latitude,
                longitude,
                address: self.address.clone(),
            }
        });
        TackleShop {
            slug: self.slug,
            name: self.name,
            address: self.address,
            postcode: self.postcode,
            phone: self.phone,
            email: self.email,
            website: self.website,
            brands: self.brands.unwrap_or_default(),
            opening_hours: self.opening_hours.map(|hours| hours.0).unwrap_or_default(),
            location,
        }
    }
}

// Repo

#[async_trait]
impl Repo<TackleShop> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<TackleShop>) -> Result<WithId<TackleShop>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<TackleShop>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: TackleShop) -> Result<WithId<TackleShop>> {
        insert(&self.pool, element).await
    }

    async fn update(
        &mut self,
        element: WithId<TackleShop>,
    ) -> Result<WithId<TackleShop>> {
        update(&self.pool, element).await
    }

    async fn delete(&mut self, id: Id<TackleShop>) -> Result<()> {
        delete(&self.pool, id).await
    }

    async fn exists(&mut self, id: Id<TackleShop>) -> Result<bool> {
        exists(&self.pool, id).await
    }
}

// Tackle Shop Repo

#[async_trait]
impl TackleShopRepo for PgDatabaseAutocommit {
    async fn tackle_shop_by_slug<S: Into<String> + Send>(
        &mut self,
        slug: S,
    ) -> Result<WithId<TackleShop>> {
        by_slug(&self.pool, slug).await
    }
}
