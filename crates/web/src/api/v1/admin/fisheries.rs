use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on, put},
    Json, Router,
};
use model::{fishery::Fishery, WithId};
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
        .route("/", get(list_fisheries).post(create_fishery))
        .route("/:id", put(update_fishery).delete(delete_fishery))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn list_fisheries(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<Fishery>>>> {
    catalog_client
        .get_fisheries()
        .await
        .map(|fisheries| VecResponse::new(fisheries).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn create_fishery(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(fishery): Json<Fishery>,
) -> RouteResult<(StatusCode, Json<WithId<Fishery>>)> {
    catalog_client
        .create_fishery(fishery)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn update_fishery(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(fishery): Json<Fishery>,
) -> RouteResult<Json<WithId<Fishery>>> {
    catalog_client
        .update_fishery(WithId::new(Id::new(id), fishery))
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

async fn delete_fishery(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<StatusCode> {
    catalog_client
        .delete_fishery(Id::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}
