use axum::{
    extract::{OriginalUri, State},
    http::{Method, StatusCode},
    routing::{get, on, post},
    Json, Router,
};
use model::{message::Message, WithId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    common::{
        route_not_found, schema_no_example, RouteErrorResponse, RouteResult,
        METHOD_FILTER_ALL,
    },
    WebState,
};

pub(crate) fn routes(state: WebState) -> Router {
    Router::new()
        .route("/schema", get(schema_no_example::<MessageSubmission>))
        .route("/", post(submit_message))
        .with_state(state)
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MessageSubmission {
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
}

async fn submit_message(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { catalog_client, .. }): State<WebState>,
    Json(submission): Json<MessageSubmission>,
) -> RouteResult<(StatusCode, Json<WithId<Message>>)> {
    let incomplete = submission.name.trim().is_empty()
        || submission.email.trim().is_empty()
        || submission.message.trim().is_empty();
    if incomplete {
        return Err(RouteErrorResponse::new(StatusCode::BAD_REQUEST)
            .with_method(&Method::POST)
            .with_uri(original_uri.path())
            .with_message("Name, email and message are required."));
    }

    catalog_client
        .submit_message(
            submission.name,
            submission.email,
            submission.subject.filter(|subject| !subject.trim().is_empty()),
            submission.message,
        )
        .await
        .map(|message| (StatusCode::CREATED, Json(message)))
        .map_err(|why| {
            RouteErrorResponse::from(why)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}
