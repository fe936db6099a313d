use axum::{
    body::Body,
    extract::{Extension, State},
    http::{HeaderName, HeaderValue, Request, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::handlers::{Advisor, Reply};
use crate::messages;

const INDEX_HTML: &str = include_str!("../assets/index.html");
const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

#[derive(Debug, Deserialize)]
struct AskRequest {
    user_input: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct AskResponse {
    response: String,
}

#[derive(Clone, Debug)]
struct RequestContext {
    request_id: String,
}

pub fn router(advisor: Advisor) -> Router {
    let request_id_layer = middleware::from_fn(assign_request_id);
    Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .with_state(advisor)
        .layer(request_id_layer)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Answers one form post. Every outcome, a missing field included, is a `200`
/// with a `{"response": ...}` body for the page to display.
async fn ask(
    State(advisor): State<Advisor>,
    Extension(request): Extension<RequestContext>,
    form: Option<Form<AskRequest>>,
) -> Response {
    let reply = match form {
        Some(Form(payload)) => advisor.answer(&payload.user_input).await,
        None => {
            tracing::debug!(request_id = %request.request_id, "Missing user_input field");
            Reply::UserError(messages::INVALID_INPUT.to_string())
        }
    };
    let outcome = match &reply {
        Reply::Success(_) => "success",
        Reply::UserError(_) => "user_error",
        Reply::SystemError(_) => "system_error",
    };
    tracing::debug!(
        request_id = %request.request_id,
        outcome,
        "Answered query"
    );
    (
        StatusCode::OK,
        Json(AskResponse {
            response: reply.into_text(),
        }),
    )
        .into_response()
}

/// Tags every request with a fresh id, echoed back in `x-request-id`.
async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    tracing::debug!(
        request_id,
        method = %method,
        path,
        status = %response.status(),
        "Handled request"
    );
    response
}
