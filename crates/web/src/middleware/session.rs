use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_cookies::Cookies;

use crate::{common::RouteErrorResponse, WebState};

pub const SESSION_COOKIE: &str = "tackleflow_session";

/// Gate for the admin routes. Requests without a live session cookie are
/// rejected before they reach a handler.
pub async fn require_session(
    State(WebState { catalog_client, .. }): State<WebState>,
    cookies: Cookies,
    req: Request,
    next: Next,
) -> Response {
    let token = match cookies.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return RouteErrorResponse::unauthorized().into_response(),
    };

    match catalog_client.session(&token).await {
        Ok(Some(_)) => next.run(req).await,
        Ok(None) => RouteErrorResponse::unauthorized().into_response(),
        Err(why) => RouteErrorResponse::from(why).into_response(),
    }
}
