use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{Method, StatusCode},
    routing::{get, on},
    Extension, Json, Router,
};
use itertools::Itertools;
use model::{
    accommodation::Accommodation, filter::FisheryFilter, fishery::Fishery, lake::Lake,
    WithId,
};
use utility::let_also::LetAlso;

use crate::{
    common::{
        route_not_found, schema, schema_no_example, HateoasResult, RouteErrorResponse,
        RouteResult, VecResponse, METHOD_FILTER_ALL,
    },
    hateoas,
    middleware::base_url::{base_url_middleware, BaseUrl},
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/fisheries{}", format_args!($($arg)*))
    };
}

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Fishery>))
        .route("/filter/schema", get(schema_no_example::<FisheryFilter>))
        .route("/districts", get(get_districts))
        .route("/featured", get(get_featured_fisheries))
        .route("/fishery-of-the-week", get(get_fishery_of_the_week))
        .route("/:slug/lakes", get(get_fishery_lakes))
        .route("/:slug/accommodation", get(get_fishery_accommodation))
        .route("/:slug", get(get_fishery))
        .route("/", get(get_fisheries))
        .layer(axum::middleware::from_fn(base_url_middleware))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_fisheries(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Query(filter): Query<FisheryFilter>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<WithId<Fishery>>>> {
    catalog_client
        .get_fisheries()
        .await
        .map(|fisheries| {
            filter
                .apply(fisheries)
                .into_iter()
                .map(|fishery| fishery_hateoas(fishery, base_url.clone()))
                .collect::<Vec<_>>()
                .let_owned(|data| VecResponse::new(data).hateoas().json())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_districts(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<String>>> {
    catalog_client
        .get_fisheries()
        .await
        .map(|fisheries| {
            fisheries
                .into_iter()
                .filter_map(|fishery| fishery.content.district)
                .unique()
                .collect::<Vec<_>>()
                .let_owned(|districts| VecResponse::new(districts).json())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_featured_fisheries(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<WithId<Fishery>>>> {
    catalog_client
        .featured_fisheries()
        .await
        .map(|fisheries| {
            fisheries
                .into_iter()
                .map(|fishery| fishery_hateoas(fishery, base_url.clone()))
                .collect::<Vec<_>>()
                .let_owned(|data| VecResponse::new(data).hateoas().json())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_fishery_of_the_week(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<WithId<Fishery>> {
    let fishery = catalog_client.fishery_of_the_week().await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
    })?;

    match fishery {
        Some(fishery) => Ok(fishery_hateoas(fishery, base_url).json()),
        None => Err(RouteErrorResponse::new(StatusCode::NOT_FOUND)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
            .with_message("No fishery of the week is set.")),
    }
}

async fn get_fishery(
    OriginalUri(original_uri): OriginalUri,
    Path(slug): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<WithId<Fishery>> {
    catalog_client
        .fishery_by_slug(slug)
        .await
        .map(|fishery| fishery_hateoas(fishery, base_url).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_fishery_lakes(
    OriginalUri(original_uri): OriginalUri,
    Path(slug): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<WithId<Lake>>>> {
    let fishery = catalog_client.fishery_by_slug(slug).await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
    })?;

    catalog_client
        .lakes_for_fishery(&fishery.id)
        .await
        .map(|lakes| {
            lakes
                .into_iter()
                .map(|lake| {
                    lake_hateoas(lake, &fishery.content.slug, base_url.clone())
                })
                .collect::<Vec<_>>()
                .let_owned(|data| VecResponse::new(data).hateoas().json())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_fishery_accommodation(
    OriginalUri(original_uri): OriginalUri,
    Path(slug): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<WithId<Accommodation>>>> {
    let fishery = catalog_client.fishery_by_slug(slug).await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
    })?;

    catalog_client
        .accommodation_for_fishery(&fishery.id)
        .await
        .map(|listings| {
            listings
                .into_iter()
                .map(|listing| {
                    accommodation_hateoas(listing, &fishery.content.slug, base_url.clone())
                })
                .collect::<Vec<_>>()
                .let_owned(|data| VecResponse::new(data).hateoas().json())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

pub(crate) fn fishery_hateoas(
    fishery: WithId<Fishery>,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<WithId<Fishery>> {
    let slug = fishery.content.slug.clone();
    let website = fishery.content.website.clone();
    hateoas::Response::builder(fishery, base_url)
        .link("self", resource!("/{}", slug))
        .link("lakes", resource!("/{}/lakes", slug))
        .link("accommodation", resource!("/{}/accommodation", slug))
        .link_extern_option("website", website)
        .build()
}

pub(crate) fn lake_hateoas(
    lake: WithId<Lake>,
    fishery_slug: &str,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<WithId<Lake>> {
    hateoas::Response::builder(lake, base_url)
        .link("fishery", resource!("/{}", fishery_slug))
        .build()
}

pub(crate) fn accommodation_hateoas(
    listing: WithId<Accommodation>,
    fishery_slug: &str,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<WithId<Accommodation>> {
    hateoas::Response::builder(listing, base_url)
        .link("fishery", resource!("/{}", fishery_slug))
        .build()
}
