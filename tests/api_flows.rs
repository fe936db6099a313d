use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::Weekday;
use serde_json::Value;
use shopadvisor::messages::{INVALID_CUSTOMER, INVALID_INPUT};
use shopadvisor::tests::util::{init_test_db, ScriptedCompleter};
use shopadvisor::{api_router, Advisor, FixedClock};
use tower::ServiceExt;

async fn ask(app: axum::Router, form_body: &'static str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ask")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(Body::from(form_body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn api_ask_flow() {
    let db = init_test_db().await;
    let completer = ScriptedCompleter::replying("Try *Kefir* today");
    let app = api_router(Advisor::new(
        db,
        completer.clone(),
        Arc::new(FixedClock(Weekday::Mon)),
    ));

    let (status, payload) = ask(app.clone(), "user_input=101+2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["response"], "Try <strong>Kefir</strong> today");

    let (status, payload) = ask(app, "user_input=4242+1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["response"], INVALID_CUSTOMER);

    assert_eq!(completer.calls(), 1);
    let prompt = completer.last_prompt().unwrap();
    assert!(prompt.contains("Include the following items in your list: Milk, Cheese, Butter"));
}

#[tokio::test]
async fn api_ask_without_form_field_is_invalid_input() {
    let db = init_test_db().await;
    let completer = ScriptedCompleter::replying("unused");
    let app = api_router(Advisor::new(
        db,
        completer.clone(),
        Arc::new(FixedClock(Weekday::Mon)),
    ));

    for body in ["other=1", ""] {
        let (status, payload) = ask(app.clone(), body).await;
        assert_eq!(status, StatusCode::OK, "{body:?}");
        assert_eq!(payload["response"], INVALID_INPUT, "{body:?}");
    }
    assert_eq!(completer.calls(), 0);
}
