pub use crate::common::RouteResult;

use axum::{extract::FromRef, routing::get_service, Router};
use catalog::client::Client;
use database::PgDatabase;
use tokio::net::TcpListener;
use tower_cookies::CookieManagerLayer;
use tower_http::services::{ServeDir, ServeFile};

pub mod api;
pub mod common;
pub mod hateoas;
pub mod middleware;

/// Admin back-office credentials, provided via `ADMIN_EMAIL` and
/// `ADMIN_PASSWORD`.
#[derive(Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn from_env() -> Option<Self> {
        let email = std::env::var("ADMIN_EMAIL").ok()?;
        let password = std::env::var("ADMIN_PASSWORD").ok()?;
        Some(Self { email, password })
    }

    pub fn accepts(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

#[derive(Clone, FromRef)]
pub struct WebState {
    pub catalog_client: Client<PgDatabase>,
    pub admin_credentials: AdminCredentials,
}

pub async fn start_web_server(state: WebState) -> std::io::Result<()> {
    let routes = Router::new()
        .nest_service("/api", api::routes(state))
        .fallback_service(static_content_router())
        .layer(CookieManagerLayer::new());

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = TcpListener::bind(bind_address).await?;
    axum::serve(listener, routes.into_make_service()).await?;

    Ok(())
}

fn static_content_router() -> Router {
    Router::new().nest_service(
        "/",
        get_service(
            ServeDir::new("./resources/www/")
                .not_found_service(ServeFile::new("./resources/www/error404.html")),
        ),
    )
}
