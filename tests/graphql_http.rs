//! End-to-end tests against the demo schema.

use reqwest::header::{ALLOW, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

mod common;

const ROLL_DICE: &str =
    "query RollDice($dice: Int!, $sides: Int){rollDice(dice:$dice,sides:$sides)}";

#[tokio::test]
async fn test_get_hello() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .get(server.url("/graphql"))
        .query(&[("query", "{hello}")])
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[ALLOW], "GET, POST, OPTIONS");
    assert_eq!(res.headers()[CONTENT_TYPE], "application/json");
    assert_eq!(res.text().await.unwrap(), r#"{"data":{"hello":"Hello world!"}}"#);
}

#[tokio::test]
async fn test_get_roll_dice_with_variables() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .get(server.url("/graphql"))
        .query(&[
            ("query", ROLL_DICE),
            ("variables", r#"{"dice": 5, "sides": 1}"#),
            ("operationName", "RollDice"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"data": {"rollDice": [1, 1, 1, 1, 1]}}));
}

#[tokio::test]
async fn test_get_missing_query() {
    let server = common::start_server(common::test_config()).await;
    for path in ["/graphql", "/graphql?query="] {
        let res = common::client().get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            res.text().await.unwrap(),
            r#"{"errors":[{"message":"Must provide query string."}]}"#
        );
    }
}

#[tokio::test]
async fn test_post_json_string_variables() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .post(server.url("/graphql"))
        .json(&json!({
            "query": ROLL_DICE,
            "variables": "{\"dice\": 8,\"sides\":1}",
            "operationName": "RollDice",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"]["rollDice"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_post_url_query_with_json_body() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .post(server.url("/graphql"))
        .query(&[("query", "{extra}")])
        .header(CONTENT_TYPE, "application/json")
        .body(r#"{"query":"{hello}"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), r#"{"data":{"extra":"Extra!"}}"#);
}

#[tokio::test]
async fn test_post_json_empty_body() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .post(server.url("/graphql"))
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"errors":[{"message":"POST body sent invalid JSON."}]}"#
    );
}

#[tokio::test]
async fn test_post_graphql_document() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .post(server.url("/graphql"))
        .query(&[("variables", r#"{"dice":2,"sides":1}"#)])
        .header(CONTENT_TYPE, "application/graphql")
        .body(ROLL_DICE)
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), r#"{"data":{"rollDice":[1,1]}}"#);
}

#[tokio::test]
async fn test_post_form() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .post(server.url("/graphql"))
        .form(&[("query", "{hello}")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), r#"{"data":{"hello":"Hello world!"}}"#);
}

#[tokio::test]
async fn test_engine_errors_are_flattened() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .get(server.url("/graphql"))
        .query(&[("query", "{nope}")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    for error in errors {
        let keys: Vec<_> = error.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["message"]);
    }
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn test_partial_result_is_success() {
    let server = common::start_server(common::test_config()).await;
    let res = common::client()
        .get(server.url("/graphql"))
        .query(&[("query", "{hello rollDice(dice: 1, sides: 0)}")])
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"data":{"hello":"Hello world!","rollDice":null}}"#
    );
}

#[tokio::test]
async fn test_options_and_head() {
    let server = common::start_server(common::test_config()).await;
    let client = common::client();

    let res = client
        .request(Method::OPTIONS, server.url("/graphql"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.headers()[ALLOW], "GET, POST, OPTIONS");

    let res = client.head(server.url("/graphql")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[ALLOW], "GET, POST, OPTIONS");
}

#[tokio::test]
async fn test_disallowed_methods() {
    let server = common::start_server(common::test_config()).await;
    let client = common::client();
    for method in [Method::PUT, Method::PATCH, Method::DELETE] {
        let res = client
            .request(method.clone(), server.url("/graphql"))
            .query(&[("query", "{hello}")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");
        assert_eq!(res.headers()[ALLOW], "GET, POST, OPTIONS");
        assert_eq!(
            res.text().await.unwrap(),
            r#"{"errors":[{"message":"GraphQL only supports GET and POST requests."}]}"#
        );
    }
}

#[tokio::test]
async fn test_dashboard_assets() {
    let server = common::start_server(common::test_config()).await;
    let client = common::client();

    let res = client.get(server.url("/graphiql")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_TYPE], "text/html; charset=UTF-8");

    let res = client
        .get(server.url("/graphiql/graphiql.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()[CONTENT_TYPE], "text/css; charset=UTF-8");

    let res = client
        .get(server.url("/graphiql/graphiql.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()[CONTENT_TYPE],
        "application/javascript; charset=UTF-8"
    );

    let res = client
        .get(server.url("/graphiql/missing.js"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_disabled() {
    let mut config = common::test_config();
    config.dashboard.enabled = false;
    let server = common::start_server(config).await;

    let res = common::client()
        .get(server.url("/graphiql"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
