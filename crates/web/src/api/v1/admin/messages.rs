use axum::{
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    routing::{delete, get, on, put},
    Json, Router,
};
use model::{message::Message, WithId};
use serde::Deserialize;
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
        .route("/", get(list_messages))
        .route("/:id/read", put(set_message_read))
        .route("/:id", delete(delete_message))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

async fn list_messages(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<Json<VecResponse<WithId<Message>>>> {
    catalog_client
        .get_messages()
        .await
        .map(|messages| VecResponse::new(messages).json())
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::GET)
                .with_uri(original_uri.path())
        })
}

#[derive(Debug, Clone, Deserialize)]
struct ReadFlag {
    #[serde(default = "read_flag_default")]
    read: bool,
}

fn read_flag_default() -> bool {
    true
}

async fn set_message_read(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(flag): Json<ReadFlag>,
) -> RouteResult<Json<WithId<Message>>> {
    catalog_client
        .mark_message_read(Id::new(id), flag.read)
        .await
        .map(Json)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::PUT)
                .with_uri(original_uri.path())
        })
}

async fn delete_message(
    OriginalUri(original_uri): OriginalUri,
    Path(id): Path<String>,
    State(WebState { catalog_client, .. }): State<WebState>,
) -> RouteResult<StatusCode> {
    catalog_client
        .delete_message(Id::new(id))
        .await
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::DELETE)
                .with_uri(original_uri.path())
        })
}
