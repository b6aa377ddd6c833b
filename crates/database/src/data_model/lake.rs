use async_trait::async_trait;
use catalog::database::{LakeRepo, Repo, Result};
use model::{fishery::Fishery, lake::Lake, WithId};
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::queries::lake::{
    delete, exists, for_fishery, get, get_all, insert, update,
};
use crate::PgDatabaseAutocommit;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct LakeRow {
    pub id: String,
    pub fishery_id: String,
    pub name: String,
    pub species: Option<Vec<String>>,
    pub size_acres: Option<f64>,
    pub max_depth_feet: Option<f64>,
    pub peg_count: Option<i32>,
    pub notes: Option<String>,
}

impl DatabaseRow for LakeRow {
    type Model = Lake;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> Self::Model {
        Lake {
            fishery_id: Id::new(self.fishery_id),
            name: self.name,
            species: self.species.unwrap_or_default(),
            size_acres: self.size_acres,
            max_depth_feet: self.max_depth_feet,
            peg_count: self.peg_count,
            notes: self.notes,
        }
    }
}

// Repo

#[async_trait]
impl Repo<Lake> for PgDatabaseAutocommit {
    async fn get(&mut self, id: Id<Lake>) -> Result<WithId<Lake>> {
        get(&self.pool, id).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<Lake>>> {
        get_all(&self.pool).await
    }

    async fn insert(&mut self, element: Lake) -> Result<WithId<Lake>> {
        insert(&self.pool, element).await
    }

    async fn update(&mut self, element: WithId<Lake>) -> Result<WithId<Lake>> {
        update(&self.pool, element).await
    }

    async fn delete(&mut self, id: Id<Lake>) -> Result<()> {
        delete(&self.pool, id).await
    }

    async fn exists(&mut self, id: Id<Lake>) -> Result<bool> {
        exists(&self.pool, id).await
    }
}

// Lake Repo

#[async_trait]
impl LakeRepo for PgDatabaseAutocommit {
    async fn lakes_for_fishery(
        &mut self,
        fishery_id: &Id<Fishery>,
    ) -> Result<Vec<WithId<Lake>>> {
        for_fishery(&self.pool, fishery_id).await
    }
}
