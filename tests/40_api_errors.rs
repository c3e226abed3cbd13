mod common;

use anyhow::Result;
use reqwest::header::COOKIE;
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use complaints_api::auth::Role;

#[tokio::test]
async fn malformed_ids_are_rejected_before_the_store() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let user = common::test_user(Role::Admin);
    let token = common::session_token(&server, &user);

    let res = client
        .get(format!("{}/api/complaints/not-a-uuid", server.base_url))
        .header(COOKIE, common::session_cookie_header(&token))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

// With a valid session but an unreachable store, handlers surface the
// generic internal error and never leak the underlying fault.
#[tokio::test]
async fn store_failures_stay_generic() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let user = common::test_user(Role::Admin);
    let token = common::session_token(&server, &user);

    let res = client
        .get(format!("{}/api/complaints/{}", server.base_url, Uuid::new_v4()))
        .header(COOKIE, common::session_cookie_header(&token))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Internal server error");
    Ok(())
}

#[tokio::test]
async fn notification_listing_also_fails_generic_without_a_store() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let user = common::test_user(Role::User);
    let token = common::session_token(&server, &user);

    let res = client
        .get(format!("{}/api/notifications", server.base_url))
        .header(COOKIE, common::session_cookie_header(&token))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Internal server error");
    Ok(())
}
