mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use redirector::config::RedirectRules;
use redirector::domain::entities::LinkRecord;
use redirector::infrastructure::store::MemoryStore;
use serde_json::Value;

#[tokio::test]
async fn test_redirect_success() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://shop.example/sale");
    let server = common::default_server(store);

    let response = server.get("/promo").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://shop.example/sale");
}

#[tokio::test]
async fn test_redirect_forwards_query_parameters() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://shop.example/sale");

    let rules = RedirectRules {
        status_code: 302,
        ..Default::default()
    };
    let server = common::create_test_server(store, rules, None);

    let response = server.get("/promo").add_query_param("coupon", "SAVE10").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://shop.example/sale?coupon=SAVE10"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = common::default_server(MemoryStore::new());

    let response = server.get("/missing").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_reserved_slug_is_not_resolved() {
    let store = MemoryStore::new();
    // Even a stored record under a reserved slug must not resolve.
    common::insert_link(&store, "dashboard", "https://example.com");
    let server = common::default_server(store);

    let response = server.get("/dashboard").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_case_insensitive_fallback_to_stored_casing() {
    let store = MemoryStore::new();
    common::insert_link(&store, "MySlug", "https://example.com/cased");
    let server = common::default_server(store);

    let response = server.get("/MySlug").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/cased");
}

#[tokio::test]
async fn test_case_sensitive_mode_misses_other_casing() {
    let store = MemoryStore::new();
    common::insert_link(&store, "MySlug", "https://example.com/cased");

    let rules = RedirectRules {
        case_sensitive: true,
        ..Default::default()
    };
    let server = common::create_test_server(store, rules, None);

    let response = server.get("/myslug").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_payload_parameters_merge_with_query() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");
    let server = common::default_server(store);

    let payload = STANDARD.encode(r#"{"foo":"bar","test":123}"#);

    let response = server
        .get(&format!("/promo/{}", payload))
        .add_query_param("additional", "param")
        .await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    let location = location.to_str().unwrap();
    assert!(location.contains("foo=bar"));
    assert!(location.contains("test=123"));
    assert!(location.contains("additional=param"));
}

#[tokio::test]
async fn test_payload_takes_priority_over_query() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");
    let server = common::default_server(store);

    let payload = STANDARD.encode(r#"{"foo":"bar"}"#);

    let response = server
        .get(&format!("/promo/{}", payload))
        .add_query_param("foo", "queryvalue")
        .await;

    let location = response.header("location");
    let location = location.to_str().unwrap();
    assert!(location.contains("foo=bar"));
    assert!(!location.contains("queryvalue"));
}

#[tokio::test]
async fn test_malformed_payload_still_redirects_plain() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");
    let server = common::default_server(store);

    let response = server.get("/promo/invalid-base64-data").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_expired_link_redirects_to_fallback() {
    let store = MemoryStore::new();
    common::insert_expired_link(
        &store,
        "old",
        "https://example.com",
        Some("https://fallback.example"),
    );
    let server = common::default_server(store);

    let response = server.get("/old").add_query_param("coupon", "SAVE10").await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    let location = location.to_str().unwrap();
    assert!(location.starts_with("https://fallback.example"));
    assert!(location.contains("coupon=SAVE10"));
}

#[tokio::test]
async fn test_expired_link_without_fallback_is_gone() {
    let store = MemoryStore::new();
    common::insert_expired_link(&store, "old", "https://example.com", None);
    let server = common::default_server(store);

    let response = server.get("/old").await;

    assert_eq!(response.status_code(), 410);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "link_expired");
}

#[tokio::test]
async fn test_invalid_token_is_gone_with_distinct_code() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");
    let server = common::default_server(store);

    let response = server
        .get("/promo")
        .add_query_param("urltoken", "not-a-date")
        .await;

    assert_eq!(response.status_code(), 410);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_link");
}

#[tokio::test]
async fn test_expired_token_on_link_without_fallback_is_gone() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");
    let server = common::default_server(store);

    let response = server
        .get("/promo")
        .add_query_param("urltoken", "2020-01-01")
        .await;

    assert_eq!(response.status_code(), 410);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "link_expired");
}

#[tokio::test]
async fn test_token_parameter_is_never_forwarded() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");
    let server = common::default_server(store);

    let response = server
        .get("/promo")
        .add_query_param("urltoken", "2099-01-01")
        .add_query_param("keep", "1")
        .await;

    assert_eq!(response.status_code(), 307);
    let location = response.header("location");
    let location = location.to_str().unwrap();
    assert!(!location.contains("urltoken"));
    assert!(location.contains("keep=1"));
}

#[tokio::test]
async fn test_query_forwarding_disabled() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");

    let rules = RedirectRules {
        redirect_with_query: false,
        ..Default::default()
    };
    let server = common::create_test_server(store, rules, None);

    let response = server.get("/promo").add_query_param("coupon", "SAVE10").await;

    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_root_redirects_to_home_url() {
    let server = common::create_test_server(
        MemoryStore::new(),
        RedirectRules::default(),
        Some("https://home.example".to_string()),
    );

    let response = server.get("/").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://home.example");
}

#[tokio::test]
async fn test_root_without_home_url_is_not_found() {
    let server = common::default_server(MemoryStore::new());

    let response = server.get("/").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_trailing_slash_resolves_same_slug() {
    let store = MemoryStore::new();
    common::insert_link(&store, "promo", "https://example.com");
    let server = common::default_server(store);

    let response = server.get("/promo/").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_stored_record_with_camel_case_fields_resolves() {
    let store = MemoryStore::new();
    let link: LinkRecord = serde_json::from_str(
        r#"{"url":"https://example.com","expiration":4102444800,"expiryRedirectUrl":"https://fallback.example"}"#,
    )
    .unwrap();
    store.insert("link:wire", link);
    let server = common::default_server(store);

    let response = server.get("/wire").await;

    // Expiration is far in the future: normal redirect.
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com");
}
