mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

// Missing and blank credentials fail closed before any store lookup, with
// the same rejection a wrong password would produce.
#[tokio::test]
async fn login_without_credentials_is_rejected() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let payloads = vec![
        json!({}),
        json!({ "email": "agent@example.com" }),
        json!({ "password": "hunter2" }),
        json!({ "email": "", "password": "hunter2" }),
        json!({ "email": "agent@example.com", "password": "   " }),
    ];

    for payload in payloads {
        let res = client
            .post(format!("{}/auth/login", server.base_url))
            .json(&payload)
            .send()
            .await?;

        assert_eq!(
            res.status(),
            StatusCode::UNAUTHORIZED,
            "payload {} was not rejected",
            payload
        );

        let body: Value = res.json().await?;
        assert_eq!(body["error"], "Invalid email or password");
    }
    Ok(())
}

#[tokio::test]
async fn login_never_sets_a_cookie_on_failure() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "email": "", "password": "" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().get(reqwest::header::SET_COOKIE).is_none());
    Ok(())
}
