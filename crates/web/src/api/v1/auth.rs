use axum::{
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    routing::{get, on, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};

use crate::{
    common::{route_not_found, RouteErrorResponse, RouteResult, METHOD_FILTER_ALL},
    middleware::session::SESSION_COOKIE,
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session_status))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct LoginRequest {
    email: String,
    password: String,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
struct SessionStatus {
    authenticated: bool,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionStatus {
    fn signed_out() -> Self {
        Self {
            authenticated: false,
            expires_at: None,
        }
    }
}

async fn login(
    OriginalUri(original_uri): OriginalUri,
    State(WebState {
        catalog_client,
        admin_credentials,
    }): State<WebState>,
    cookies: Cookies,
    Json(request): Json<LoginRequest>,
) -> RouteResult<Json<SessionStatus>> {
    if !admin_credentials.accepts(&request.email, &request.password) {
        return Err(RouteErrorResponse::new(StatusCode::UNAUTHORIZED)
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
            .with_message("Invalid email or password."));
    }

    let session = catalog_client.sign_in().await.map_err(|why| {
        RouteErrorResponse::from(why)
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
    })?;

    let mut cookie = Cookie::new(SESSION_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookies.add(cookie);

    Ok(Json(SessionStatus {
        authenticated: true,
        expires_at: Some(session.expires_at),
    }))
}

async fn session_status(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    cookies: Cookies,
) -> RouteResult<Json<SessionStatus>> {
    let token = match cookies.get(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return Ok(Json(SessionStatus::signed_out())),
    };

    catalog_client
        .session(&token)
        .await
        .map(|session| {
            Json(match session {
                Some(session) => SessionStatus {
                    authenticated: true,
                    expires_at: Some(session.expires_at),
                },
                None => SessionStatus::signed_out(),
            })
        })
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

async fn logout(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    cookies: Cookies,
) -> RouteResult<Json<SessionStatus>> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        let token = cookie.value().to_string();
        catalog_client.sign_out(&token).await.map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })?;

        let mut removal = Cookie::new(SESSION_COOKIE, "");
        removal.set_path("/");
        cookies.remove(removal);
    }

    Ok(Json(SessionStatus::signed_out()))
}
