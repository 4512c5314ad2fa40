//! Integration tests for JWT authentication middleware

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use serde_json::Value;
use std::sync::Arc;

use estate_api::middleware::auth::{AuthContext, JwtAuth};
use estate_core::services::token::{TokenService, TokenServiceConfig};

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "middleware-test-secret".to_string(),
        ..TokenServiceConfig::default()
    }))
}

async fn whoami(auth: AuthContext) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "user_id": auth.user_id }))
}

#[actix_web::test]
async fn test_middleware_requires_auth_header() {
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(token_service()))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_middleware_rejects_invalid_token() {
    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(token_service()))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", "Bearer invalid-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_INVALID");
}

#[actix_web::test]
async fn test_middleware_rejects_expired_token() {
    let expired = TokenService::new(TokenServiceConfig {
        jwt_secret: "middleware-test-secret".to_string(),
        access_token_expiry_minutes: -10,
        ..TokenServiceConfig::default()
    });
    let token = expired.generate_access_token(5).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(token_service()))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", token.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "TOKEN_EXPIRED");
}

#[actix_web::test]
async fn test_middleware_injects_auth_context() {
    let tokens = token_service();
    let token = tokens.generate_access_token(77).unwrap();

    let app = test::init_service(
        App::new()
            .wrap(JwtAuth::new(Arc::clone(&tokens)))
            .route("/protected", web::get().to(whoami)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", token.token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["user_id"], 77);
}

#[actix_web::test]
async fn test_auth_context_extractor_without_middleware() {
    let app = test::init_service(App::new().route("/protected", web::get().to(whoami))).await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
