use chrono::Utc;
use model::{
    accommodation::Accommodation, fishery::Fishery, lake::Lake, message::Message,
    tackle_shop::TackleShop, WithId,
};
use utility::{
    id::{slug_from_name, Id},
    let_also::LetAlso,
};

use crate::{
    database::{
        AccommodationRepo, Database, FisheryRepo, LakeRepo, MessageRepo, Repo,
        SessionRepo, TackleShopRepo,
    },
    not_found_to_none,
    session::Session,
    RequestResult,
};

/// The facade the web layer talks to. One method per catalog operation;
/// every remote operation either succeeds or surfaces a single error.
#[derive(Debug, Clone)]
pub struct Client<D>
where
    D: Database + Send + Sync + Sized + 'static,
{
    pub database: D,
}

impl<D> Client<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }
}

// - Fisheries -

impl<D> Client<D>
where
    D: Database,
{
    pub async fn get_fisheries(&self) -> RequestResult<Vec<WithId<Fishery>>> {
        self.database.auto().get_all().await?.let_owned(Ok)
    }

    pub async fn get_fishery(&self, id: Id<Fishery>) -> RequestResult<WithId<Fishery>> {
        Repo::<Fishery>::get(&mut self.database.auto(), id)
            .await?
            .let_owned(Ok)
    }

    pub async fn fishery_by_slug<S: Into<String> + Send>(
        &self,
        slug: S,
    ) -> RequestResult<WithId<Fishery>> {
        self.database
            .auto()
            .fishery_by_slug(slug)
            .await?
            .let_owned(Ok)
    }

    pub async fn featured_fisheries(&self) -> RequestResult<Vec<WithId<Fishery>>> {
        self.database.auto().featured_fisheries().await?.let_owned(Ok)
    }

    pub async fn fishery_of_the_week(
        &self,
    ) -> RequestResult<Option<WithId<Fishery>>> {
        not_found_to_none(
            self.database
                .auto()
                .fishery_of_the_week()
                .await
                .map_err(Into::into),
        )
    }

    pub async fn create_fishery(
        &self,
        fishery: Fishery,
    ) -> RequestResult<WithId<Fishery>> {
        let fishery = with_default_slug(fishery);
        self.database.auto().insert(fishery).await?.let_owned(Ok)
    }

    pub async fn update_fishery(
        &self,
        fishery: WithId<Fishery>,
    ) -> RequestResult<WithId<Fishery>> {
        let fishery = WithId::new(fishery.id, with_default_slug(fishery.content));
        self.database.auto().update(fishery).await?.let_owned(Ok)
    }

    pub async fn delete_fishery(&self, id: Id<Fishery>) -> RequestResult<()> {
        Repo::<Fishery>::delete(&mut self.database.auto(), id)
            .await?
            .let_owned(Ok)
    }
}

fn with_default_slug(mut fishery: Fishery) -> Fishery {
    if fishery.slug.trim().is_empty() {
        fishery.slug = slug_from_name(&fishery.name);
    }
    fishery
}

// - Lakes -

impl<D> Client<D>
where
    D: Database,
{
    pub async fn get_lakes(&self) -> RequestResult<Vec<WithId<Lake>>> {
        self.database.auto().get_all().await?.let_owned(Ok)
    }

    pub async fn lakes_for_fishery(
        &self,
        fishery_id: &Id<Fishery>,
    ) -> RequestResult<Vec<WithId<Lake>>> {
        self.database
            .auto()
            .lakes_for_fishery(fishery_id)
            .await?
            .let_owned(Ok)
    }

    pub async fn create_lake(&self, lake: Lake) -> RequestResult<WithId<Lake>> {
        self.database.auto().insert(lake).await?.let_owned(Ok)
    }

    pub async fn update_lake(&self, lake: WithId<Lake>) -> RequestResult<WithId<Lake>> {
        self.database.auto().update(lake).await?.let_owned(Ok)
    }

    pub async fn delete_lake(&self, id: Id<Lake>) -> RequestResult<()> {
        Repo::<Lake>::delete(&mut self.database.auto(), id)
            .await?
            .let_owned(Ok)
    }
}

// - Accommodation -

impl<D> Client<D>
where
    D: Database,
{
    pub async fn get_accommodation(
        &self,
    ) -> RequestResult<Vec<WithId<Accommodation>>> {
        self.database.auto().get_all().await?.let_owned(Ok)
    }

    pub async fn accommodation_for_fishery(
        &self,
        fishery_id: &Id<Fishery>,
    ) -> RequestResult<Vec<WithId<Accommodation>>> {
        self.database
            .auto()
            .accommodation_for_fishery(fishery_id)
            .await?
            .let_owned(Ok)
    }

    pub async fn create_accommodation(
        &self,
        accommodation: Accommodation,
    ) -> RequestResult<WithId<Accommodation>> {
        self.database
            .auto()
            .insert(accommodation)
            .await?
            .let_owned(Ok)
    }

    pub async fn update_accommodation(
        &self,
        accommodation: WithId<Accommodation>,
    ) -> RequestResult<WithId<Accommodation>> {
        self.database
            .auto()
            .update(accommodation)
            .await?
            .let_owned(Ok)
    }

    pub async fn delete_accommodation(
        &self,
        id: Id<Accommodation>,
    ) -> RequestResult<()> {
        Repo::<Accommodation>::delete(&mut self.database.auto(), id)
            .await?
            .let_owned(Ok)
    }
}

// - Tackle shops -

impl<D> Client<D>
where
    D: Database,
{
    pub async fn get_tackle_shops(&self) -> RequestResult<Vec<WithId<TackleShop>>> {
        self.database.auto().get_all().await?.let_owned(Ok)
    }

    pub async fn tackle_shop_by_slug<S: Into<String> + Send>(
        &self,
        slug: S,
    ) -> RequestResult<WithId<TackleShop>> {
        self.database
            .auto()
            .tackle_shop_by_slug(slug)
            .await?
            .let_owned(Ok)
    }

    pub async fn create_tackle_shop(
        &self,
        mut shop: TackleShop,
    ) -> RequestResult<WithId<TackleShop>> {
        if shop.slug.trim().is_empty() {
            shop.slug = slug_from_name(&shop.name);
        }
        self.database.auto().insert(shop).await?.let_owned(Ok)
    }

    pub async fn update_tackle_shop(
        &self,
        shop: WithId<TackleShop>,
    ) -> RequestResult<WithId<TackleShop>> {
        self.database.auto().update(shop).await?.let_owned(Ok)
    }

    pub async fn delete_tackle_shop(&self, id: Id<TackleShop>) -> RequestResult<()> {
        Repo::<TackleShop>::delete(&mut self.database.auto(), id)
            .await?
            .let_owned(Ok)
    }
}

// - Messages -

impl<D> Client<D>
where
    D: Database,
{
    pub async fn submit_message(
        &self,
        name: String,
        email: String,
        subject: Option<String>,
        body: String,
    ) -> RequestResult<WithId<Message>> {
        let message = Message {
            name,
            email,
            subject,
            body,
            read: false,
            created_at: Utc::now(),
        };
        self.database.auto().insert(message).await?.let_owned(Ok)
    }

    pub async fn get_messages(&self) -> RequestResult<Vec<WithId<Message>>> {
        self.database.auto().get_all().await?.let_owned(Ok)
    }

    pub async fn mark_message_read(
        &self,
        id: Id<Message>,
        read: bool,
    ) -> RequestResult<WithId<Message>> {
        self.database
            .auto()
            .set_message_read(id, read)
            .await?
            .let_owned(Ok)
    }

    pub async fn delete_message(&self, id: Id<Message>) -> RequestResult<()> {
        Repo::<Message>::delete(&mut self.database.auto(), id)
            .await?
            .let_owned(Ok)
    }
}

// - Sessions -

impl<D> Client<D>
where
    D: Database,
{
    /// Issues and persists a fresh admin session. Credential checking is
    /// the caller's concern.
    pub async fn sign_in(&self) -> RequestResult<Session> {
        self.database
            .auto()
            .put_session(Session::issue())
            .await?
            .let_owned(Ok)
    }

    /// Resolves a session token. Expired sessions are removed on the way
    /// out and reported as absent.
    pub async fn session(&self, token: &str) -> RequestResult<Option<Session>> {
        let session = self.database.auto().session_by_token(token).await?;
        match session {
            Some(session) if session.is_expired_at(Utc::now()) => {
                self.database.auto().delete_session(token).await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    pub async fn sign_out(&self, token: &str) -> RequestResult<()> {
        self.database.auto().delete_session(token).await?;
        Ok(())
    }

    /// Housekeeping: drops every session past its expiry. Returns how many
    /// were removed.
    pub async fn purge_expired_sessions(&self) -> RequestResult<u64> {
        self.database
            .auto()
            .delete_expired_sessions(Utc::now())
            .await?
            .let_owned(Ok)
    }
}
