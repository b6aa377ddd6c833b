use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::{get, on},
    Router,
};
use model::{accommodation::Accommodation, WithId};

use crate::{
    common::{
        route_not_found, schema, HateoasResult, RouteErrorResponse, VecResponse,
        METHOD_FILTER_ALL,
    },
    middleware::base_url::base_url_middleware,
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<Accommodation>))
        .route("/", get(get_accommodation))
        .layer(axum::middleware::from_fn(base_url_middleware))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_accommodation(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> HateoasResult<VecResponse<WithId<Accommodation>>> {
    catalog_client
        .get_accommodation()
        .await
        .map(|listings| VecResponse::new(listings).hateoas().json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}
