use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on, put},
    Json, Router,
};
use model::{lake::Lake, WithId};
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
        .route("/", get(list_lakes).post(create_lake))
        .route("/:id", put(update_lake).delete(delete_lake))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn list_lakes(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<Lake>>>> {
    catalog_client
        .get_lakes()
        .await
        .map(|lakes| VecResponse::new(lakes).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn create_lake(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(lake): Json<Lake>,
) -> RouteResult<(StatusCode, Json<WithId<Lake>>)> {
    catalog_client
        .create_lake(lake)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn update_lake(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(lake): Json<Lake>,
) -> RouteResult<Json<WithId<Lake>>> {
    catalog_client
        .update_lake(WithId::new(Id::new(id), lake))
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

async fn delete_lake(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<StatusCode> {
    catalog_client
        .delete_lake(Id::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}
