//! Integration tests for POST /api/v1/auth/login

mod common;

use actix_web::{http::StatusCode, test, App};
use serde_json::{json, Value};

use common::{TestContext, MAX_PAYLOAD, PASSWORD};
use estate_api::configure;

async fn post_login(ctx: &TestContext, payload: Value) -> (StatusCode, Value) {
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    (status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn test_login_success_returns_usable_token() {
    let ctx = TestContext::new();
    ctx.add_user(11, "buyer@example.com", true).await;

    let (status, body) = post_login(
        &ctx,
        json!({ "email": "buyer@example.com", "password": PASSWORD }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert_eq!(body["data"]["user_id"], 11);
    assert!(body["data"]["expires_in"].as_i64().unwrap() > 0);

    let token = body["data"]["access_token"].as_str().unwrap();
    let claims = ctx.tokens.verify_access_token(token).unwrap();
    assert_eq!(claims.user_id().unwrap(), 11);
}

#[actix_web::test]
async fn test_login_blank_email_is_required_field() {
    let ctx = TestContext::new();

    let (status, body) = post_login(&ctx, json!({ "email": "   ", "password": "x" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "REQUIRED_FIELD");
    assert_eq!(body["details"]["field"], "email");
}

#[actix_web::test]
async fn test_login_missing_password_is_required_field() {
    let ctx = TestContext::new();

    let (status, body) = post_login(&ctx, json!({ "email": "buyer@example.com" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "REQUIRED_FIELD");
    assert_eq!(body["details"]["field"], "password");
}

#[actix_web::test]
async fn test_login_malformed_email() {
    let ctx = TestContext::new();

    let (status, body) = post_login(&ctx, json!({ "email": "not-an-email", "password": "x" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INVALID_EMAIL");
}

#[actix_web::test]
async fn test_login_blank_email_with_long_password_is_required_field() {
    let ctx = TestContext::new();

    let (status, body) = post_login(&ctx, json!({ "email": "", "password": "p".repeat(73) })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "REQUIRED_FIELD");
    assert_eq!(body["details"]["field"], "email");
}

#[actix_web::test]
async fn test_login_long_password_reaches_authentication() {
    let ctx = TestContext::new();
    ctx.add_user(14, "buyer@example.com", true).await;

    let (status, body) = post_login(
        &ctx,
        json!({ "email": "buyer@example.com", "password": "p".repeat(73) }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let ctx = TestContext::new();
    ctx.add_user(12, "buyer@example.com", true).await;

    let (status, body) = post_login(
        &ctx,
        json!({ "email": "buyer@example.com", "password": "wrong-password" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[actix_web::test]
async fn test_login_disabled_account() {
    let ctx = TestContext::new();
    ctx.add_user(13, "gone@example.com", false).await;

    let (status, body) = post_login(
        &ctx,
        json!({ "email": "gone@example.com", "password": PASSWORD }),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "ACCOUNT_DISABLED");
}

#[actix_web::test]
async fn test_login_malformed_json_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}
