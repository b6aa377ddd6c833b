use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{get, on, put},
    Json, Router,
};
use model::{tackle_shop::TackleShop, WithId};
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
        .route("/", get(list_tackle_shops).post(create_tackle_shop))
        .route("/:id", put(update_tackle_shop).delete(delete_tackle_shop))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn list_tackle_shops(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<TackleShop>>>> {
    catalog_client
        .get_tackle_shops()
        .await
        .map(|shops| VecResponse::new(shops).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn create_tackle_shop(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(shop): Json<TackleShop>,
) -> RouteResult<(StatusCode, Json<WithId<TackleShop>>)> {
    catalog_client
        .create_tackle_shop(shop)
        .await
        .map(|created| (StatusCode::CREATED, Json(created)))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

async fn update_tackle_shop(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(shop): Json<TackleShop>,
) -> RouteResult<Json<WithId<TackleShop>>> {
    catalog_client
        .update_tackle_shop(WithId::new(Id::new(id), shop))
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

async fn delete_tackle_shop(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<StatusCode> {
    catalog_client
        .delete_tackle_shop(Id::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}
