use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on, put},
    Json, Router,
};
use model::{accommodation::Accommodation, WithId};
use utility::id::Id;

use crate::{
    common::{
        route_not_found, RouteErrorResponse, RouteResult, VecResponse,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/", get(list_accommodation).post(create_accommodation))
        .route("/:id", put(update_accommodation).delete(delete_accommodation))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn list_accommodation(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<Accommodation>>>> {
    catalog_client
        .get_accommodation()
        .await
        .map(|listings| VecResponse::new(listings).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn create_accommodation(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(listing): Json<Accommodation>,
) -> RouteResult<(StatusCode, Json<WithId<Accommodation>>)> {
    catalog_client
        .create_accommodation(listing)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn update_accommodation(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(listing): Json<Accommodation>,
) -> RouteResult<Json<WithId<Accommodation>>> {
    catalog_client
        .update_accommodation(WithId::new(Id::new(id), listing))
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

async fn delete_accommodation(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<StatusCode> {
    catalog_client
        .delete_accommodation(Id::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}
