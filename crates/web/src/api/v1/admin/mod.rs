use axum::{routing::on, Router};

use crate::{
    common::{route_not_found, METHOD_FILTER_ALL},
    middleware::session::require_session,
    WebState,
};

mod accommodation;
mod fisheries;
mod lakes;
mod messages;
mod tackle_shops;

/// The back-office API. Every route in here sits behind the session gate.
pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .nest_service("/fisheries", fisheries::routes(state.clone()))
        .nest_service("/lakes", lakes::routes(state.clone()))
        .nest_service("/accommodation", accommodation::routes(state.clone()))
        .nest_service("/tackle-shops", tackle_shops::routes(state.clone()))
        .nest_service("/messages", messages::routes(state.clone()))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
        .layer(axum::middleware::from_fn_with_state(state, require_session))
}
