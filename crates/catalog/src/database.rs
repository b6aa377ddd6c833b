use std::{error, fmt::Debug, result};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use model::{
    accommodation::Accommodation, fishery::Fishery, lake::Lake, message::Message,
    tackle_shop::TackleShop, WithId,
};
use serde::Serialize;
use utility::id::{HasId, Id};

use crate::session::Session;

#[derive(Debug)]
pub enum DatabaseError {
    NotFound,
    IdMissing,
    Other(Box<dyn error::Error + Send + Sync>),
}

pub type Result<T> = result::Result<T, DatabaseError>;

/// Basic record access for a single collection.
#[async_trait]
pub trait Repo<T: Serialize + HasId>
where
    <T as HasId>::IdType: Debug + Clone + Serialize,
{
    async fn get(&mut self, id: Id<T>) -> Result<WithId<T>>;
    async fn get_all(&mut self) -> Result<Vec<WithId<T>>>;
    async fn insert(&mut self, element: T) -> Result<WithId<T>>;
    async fn update(&mut self, element: WithId<T>) -> Result<WithId<T>>;
    async fn delete(&mut self, id: Id<T>) -> Result<()>;
    async fn exists(&mut self, id: Id<T>) -> Result<bool>;
}

#[async_trait]
pub trait FisheryRepo: Repo<Fishery> {
    async fn fishery_by_slug<S: Into<String> + Send>(
        &mut self,
        slug: S,
    ) -> Result<WithId<Fishery>>;

    async fn featured_fisheries(&mut self) -> Result<Vec<WithId<Fishery>>>;

    /// The singleton manually-flagged highlight. `NotFound` when no fishery
    /// currently carries the flag.
    async fn fishery_of_the_week(&mut self) -> Result<WithId<Fishery>>;
}

#[async_trait]
pub trait LakeRepo: Repo<Lake> {
    async fn lakes_for_fishery(
        &mut self,
        fishery_id: &Id<Fishery>,
    ) -> Result<Vec<WithId<Lake>>>;
}

#[async_trait]
pub trait AccommodationRepo: Repo<Accommodation> {
    async fn accommodation_for_fishery(
        &mut self,
        fishery_id: &Id<Fishery>,
    ) -> Result<Vec<WithId<Accommodation>>>;
}

#[async_trait]
pub trait TackleShopRepo: Repo<TackleShop> {
    async fn tackle_shop_by_slug<S: Into<String> + Send>(
        &mut self,
        slug: S,
    ) -> Result<WithId<TackleShop>>;
}

#[async_trait]
pub trait MessageRepo: Repo<Message> {
    async fn set_message_read(
        &mut self,
        id: Id<Message>,
        read: bool,
    ) -> Result<WithId<Message>>;
}

#[async_trait]
pub trait SessionRepo {
    async fn put_session(&mut self, session: Session) -> Result<Session>;

    async fn session_by_token(&mut self, token: &str) -> Result<Option<Session>>;

    async fn delete_session(&mut self, token: &str) -> Result<()>;

    /// Removes every session that expired before `now`. Returns the number
    /// of sessions removed.
    async fn delete_expired_sessions(&mut self, now: DateTime<Utc>) -> Result<u64>;
}

pub trait DatabaseOperations:
    FisheryRepo + LakeRepo + AccommodationRepo + TackleShopRepo + MessageRepo + SessionRepo
{
}

pub trait DatabaseAutocommit: DatabaseOperations {}

/// Trait to implement a catalog database. Multiple concurrent accesses
/// should be possible by e.g. cloning the database object.
pub trait Database: Clone + Send + Sync + Sized {
    type Autocommit: DatabaseAutocommit + Send;

    fn auto(&self) -> Self::Autocommit;
}
