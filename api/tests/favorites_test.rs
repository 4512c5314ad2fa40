//! Integration tests for the favorites endpoints

mod common;

use actix_web::{http::StatusCode, test, App};
use serde_json::Value;

use common::{TestContext, MAX_PAYLOAD};
use estate_api::configure;
use estate_core::domain::entities::favorite::Favorite;

#[actix_web::test]
async fn test_toggle_status_list_and_count() {
    let ctx = TestContext::new();
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;
    let auth = ctx.bearer(1);

    // Toggle on
    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/10/toggle")
        .insert_header(("Authorization", auth.as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["property_id"], 10);
    assert_eq!(body["data"]["favored"], true);
    assert_eq!(body["data"]["favorite_count"], 1);

    // Status
    let req = test::TestRequest::get()
        .uri("/api/v1/favorites/10")
        .insert_header(("Authorization", auth.as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["favored"], true);

    // List
    let req = test::TestRequest::get()
        .uri("/api/v1/favorites")
        .insert_header(("Authorization", auth.as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["property_id"], 10);

    // Public count
    let req = test::TestRequest::get()
        .uri("/api/v1/properties/10/favorites/count")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["count"], 1);

    // Toggle off
    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/10/toggle")
        .insert_header(("Authorization", auth.as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["favored"], false);
    assert_eq!(body["data"]["favorite_count"], 0);
}

#[actix_web::test]
async fn test_remove_is_idempotent() {
    let ctx = TestContext::new();
    ctx.favorites.seed(Favorite::new(2, 20)).await;
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;
    let auth = ctx.bearer(2);

    for _ in 0..2 {
        let req = test::TestRequest::delete()
            .uri("/api/v1/favorites/20")
            .insert_header(("Authorization", auth.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    assert!(ctx.favorites.is_empty().await);
}

#[actix_web::test]
async fn test_users_only_see_their_own_favorites() {
    let ctx = TestContext::new();
    ctx.favorites.seed(Favorite::new(3, 30)).await;
    ctx.favorites.seed(Favorite::new(4, 40)).await;
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/favorites")
        .insert_header(("Authorization", ctx.bearer(3).as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["property_id"], 30);

    let req = test::TestRequest::get()
        .uri("/api/v1/favorites/40")
        .insert_header(("Authorization", ctx.bearer(3).as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["favored"], false);
}

#[actix_web::test]
async fn test_list_paging_is_clamped() {
    let ctx = TestContext::new();
    for property_id in 1..=3 {
        ctx.favorites.seed(Favorite::new(5, property_id)).await;
    }
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;
    let auth = ctx.bearer(5);

    let req = test::TestRequest::get()
        .uri("/api/v1/favorites?limit=0&offset=-4")
        .insert_header(("Authorization", auth.as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/favorites?limit=1000")
        .insert_header(("Authorization", auth.as_str()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_favorites_require_authentication() {
    let ctx = TestContext::new();
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/10/toggle")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");

    assert!(ctx.favorites.is_empty().await);
}

#[actix_web::test]
async fn test_non_numeric_property_id_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/properties/abc/favorites/count")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_database_failure_is_service_unavailable() {
    let ctx = TestContext::new();
    ctx.favorites.set_should_fail(true);
    let app = test::init_service(App::new().configure(configure(ctx.state.clone(), MAX_PAYLOAD))).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/properties/1/favorites/count")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "DATABASE_ERROR");
}
