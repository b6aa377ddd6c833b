use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, State},
    http::Method,
    routing::{get, on},
    Extension, Router,
};
use model::{tackle_shop::TackleShop, WithId};
use utility::let_also::LetAlso;

use crate::{
    common::{
        route_not_found, schema, HateoasResult, RouteErrorResponse, VecResponse,
        METHOD_FILTER_ALL,
    },
    hateoas,
    middleware::base_url::{base_url_middleware, BaseUrl},
    WebState,
};

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::v1::resource!("/tackle-shops{}", format_args!($($arg)*))
    };
}

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema::<TackleShop>))
        .route("/:slug", get(get_tackle_shop))
        .route("/", get(get_tackle_shops))
        .layer(axum::middleware::from_fn(base_url_middleware))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn get_tackle_shops(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<VecResponse<hateoas::Response<WithId<TackleShop>>>> {
    catalog_client
        .get_tackle_shops()
        .await
        .map(|shops| {
            shops
                .into_iter()
                .map(|shop| tackle_shop_hateoas(shop, base_url.clone()))
                .collect::<Vec<_>>()
                .let_owned(|data| VecResponse::new(data).hateoas().json())
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn get_tackle_shop(
    OriginalUri(original_uri): OriginalUri,
    Path(slug): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Extension(base_url): Extension<Arc<BaseUrl>>,
) -> HateoasResult<WithId<TackleShop>> {
    catalog_client
        .tackle_shop_by_slug(slug)
        .await
        .map(|shop| tackle_shop_hateoas(shop, base_url).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

pub(crate) fn tackle_shop_hateoas(
    shop: WithId<TackleShop>,
    base_url: Arc<BaseUrl>,
) -> hateoas::Response<WithId<TackleShop>> {
    let slug = shop.content.slug.clone();
    let website = shop.content.website.clone();
    hateoas::Response::builder(shop, base_url)
        .link("self", resource!("/{}", slug))
        .link_extern_option("website", website)
        .build()
}
