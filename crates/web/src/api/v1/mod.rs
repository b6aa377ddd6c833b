use axum::{
    routing::on,
    Router,
};

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    WebState,
};

mod accommodation;
mod admin;
mod auth;
mod fisheries;
mod messages;
mod tackle_shops;

macro_rules! resource {
    ($($arg:tt)*) => {
        crate::api::resource!("/v1{}", format_args!($($arg)*))
    };
}
pub(crate) use resource;

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .nest_service("/fisheries", fisheries::routes(state.clone()))
        .nest_service("/accommodation", accommodation::routes(state.clone()))
        .nest_service("/tackle-shops", tackle_shops::routes(state.clone()))
        .nest_service("/messages", messages::routes(state.clone()))
        .nest_service("/admin", admin::routes(state.clone()))
        .nest_service("/auth", auth::routes(state))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}
