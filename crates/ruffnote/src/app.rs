use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        discovery::discovery,
        health::healthz,
        items::{check_availability, create_item, delete_item, list_items, rename_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let api_routes = Router::new()
        .route("/items", get(list_items))
        .route(
            "/item",
            get(check_availability)
                .post(create_item)
                .put(rename_item)
                .delete(delete_item),
        )
        .route("/discovery", get(discovery))
        .layer(cors);

    let root = state.service.root_path();

    Router::new()
        .route("/healthz", get(healthz))
        .nest(&root, api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use ruffnote_core::item::LocalIdStrategy;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use std::sync::Arc;

    use crate::config::Config;
    use crate::state::test_support::{FailingDeleteStore, INVALID_TOKEN};

    const ROOT: &str = "/api/ruffnote_plus/v1";
    const U1: &str = "u1@example.com";
    const U2: &str = "u2@example.com";

    fn request(method: &str, uri: &str, user: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {user}"));
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    async fn create(app: &Router, user: &str, name: &str) -> (StatusCode, Value) {
        send(
            app,
            request("POST", &format!("{ROOT}/item"), Some(user), Some(json!({ "name": name }))),
        )
        .await
    }

    async fn rename(app: &Router, user: &str, id: &str, name: &str) -> (StatusCode, Value) {
        send(
            app,
            request(
                "PUT",
                &format!("{ROOT}/item"),
                Some(user),
                Some(json!({ "id": id, "name": name })),
            ),
        )
        .await
    }

    async fn available(app: &Router, user: &str, name: &str) -> bool {
        let (status, json) = send(
            app,
            request("GET", &format!("{ROOT}/item?name={name}"), Some(user), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], name);
        json["available"].as_bool().unwrap()
    }

    async fn list(app: &Router, user: &str, query: &str) -> Vec<Value> {
        let (status, json) = send(
            app,
            request("GET", &format!("{ROOT}/items{query}"), Some(user), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        json["items"].as_array().unwrap().clone()
    }

    async fn delete(app: &Router, user: &str, id: &str) -> (StatusCode, Value) {
        send(
            app,
            request("DELETE", &format!("{ROOT}/item?id={id}"), Some(user), None),
        )
        .await
    }

    #[tokio::test]
    async fn test_healthz() {
        let app = create_app(AppState::for_tests());

        let (status, json) = send(&app, request("GET", "/healthz", None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_discovery_lists_methods_without_auth() {
        let app = create_app(AppState::for_tests());

        let (status, json) =
            send(&app, request("GET", &format!("{ROOT}/discovery"), None, None)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "ruffnote_plus");
        assert_eq!(json["version"], "v1");
        assert_eq!(json["description"], "ruffnote+");

        let methods: Vec<&str> = json["methods"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            methods,
            vec![
                "item.list",
                "item.availabile",
                "item.create",
                "item.rename",
                "item.delete"
            ]
        );
        assert_eq!(json["methods"][0]["client_ids"], json!(["web"]));
    }

    #[tokio::test]
    async fn test_item_routes_require_auth() {
        let app = create_app(AppState::for_tests());

        for (method, uri) in [
            ("GET", format!("{ROOT}/items")),
            ("GET", format!("{ROOT}/item?name=alpha")),
            ("DELETE", format!("{ROOT}/item?id=id")),
        ] {
            let (status, json) = send(&app, request(method, &uri, None, None)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(json["error"]["kind"], "unauthorized");
        }

        let (status, _) = create(&app, INVALID_TOKEN, "alpha").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unauthenticated_create_writes_nothing() {
        let app = create_app(AppState::for_tests());

        let (status, _) = send(
            &app,
            request("POST", &format!("{ROOT}/item"), None, Some(json!({ "name": "alpha" }))),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(available(&app, U1, "alpha").await);
    }

    #[tokio::test]
    async fn test_availability_without_items() {
        let app = create_app(AppState::for_tests());
        assert!(available(&app, U1, "alpha").await);
    }

    #[tokio::test]
    async fn test_availability_requires_name() {
        let app = create_app(AppState::for_tests());

        let (status, json) =
            send(&app, request("GET", &format!("{ROOT}/item"), Some(U1), None)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "require name");
    }

    #[tokio::test]
    async fn test_create_then_name_is_taken() {
        let app = create_app(AppState::for_tests());

        let (status, json) = create(&app, U1, "alpha").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "id": "id", "name": "alpha" }));

        assert!(!available(&app, U2, "alpha").await);
    }

    #[tokio::test]
    async fn test_create_twice_conflicts() {
        let app = create_app(AppState::for_tests());

        assert_eq!(create(&app, U1, "alpha").await.0, StatusCode::OK);

        let (status, json) = create(&app, U1, "alpha").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["error"]["kind"], "conflict");

        let (status, _) = create(&app, U2, "alpha").await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let app = create_app(AppState::for_tests());

        let (status, json) = create(&app, U1, "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "require name");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = create_app(AppState::for_tests());

        let request = Request::builder()
            .method("POST")
            .uri(format!("{ROOT}/item"))
            .header(header::AUTHORIZATION, format!("Bearer {U1}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, json) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["kind"], "bad_request");
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_owner_and_limited() {
        let config = Config {
            id_strategy: LocalIdStrategy::Uuid,
            ..Config::default()
        };
        let app = create_app(AppState::for_tests_with(&config));

        for name in ["a", "b", "c"] {
            assert_eq!(create(&app, U1, name).await.0, StatusCode::OK);
        }
        assert_eq!(create(&app, U2, "d").await.0, StatusCode::OK);

        let items = list(&app, U1, "").await;
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item["name"] != "d"));

        assert_eq!(list(&app, U1, "?limit=2").await.len(), 2);
        assert_eq!(list(&app, U1, "?limit=0").await.len(), 1);
        assert_eq!(list(&app, U2, "").await.len(), 1);
    }

    #[tokio::test]
    async fn test_uuid_strategy_assigns_distinct_ids() {
        let config = Config {
            id_strategy: LocalIdStrategy::Uuid,
            ..Config::default()
        };
        let app = create_app(AppState::for_tests_with(&config));

        let (_, first) = create(&app, U1, "a").await;
        let (_, second) = create(&app, U1, "b").await;

        assert_ne!(first["id"], "id");
        assert_ne!(first["id"], second["id"]);
    }

    #[tokio::test]
    async fn test_rename_moves_item_to_new_name() {
        let app = create_app(AppState::for_tests());

        assert_eq!(create(&app, U1, "a").await.0, StatusCode::OK);

        let (status, json) = rename(&app, U1, "id", "b").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "id": "id", "name": "b" }));

        assert!(available(&app, U1, "a").await);
        assert!(!available(&app, U1, "b").await);

        let items = list(&app, U1, "").await;
        assert_eq!(items, vec![json!({ "id": "id", "name": "b" })]);
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_conflicts() {
        let app = create_app(AppState::for_tests());

        assert_eq!(create(&app, U1, "a").await.0, StatusCode::OK);
        assert_eq!(create(&app, U2, "b").await.0, StatusCode::OK);

        let (status, _) = rename(&app, U1, "id", "b").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(!available(&app, U1, "a").await);
    }

    #[tokio::test]
    async fn test_rename_with_multibyte_id_keeps_name_unique() {
        let app = create_app(AppState::for_tests());

        for (id, name) in [("🦀", "n1"), ("\u{FFFF}x", "n2")] {
            let (status, json) = rename(&app, U1, id, name).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json, json!({ "id": id, "name": name }));

            assert!(!available(&app, U2, name).await);
            let (status, json) = create(&app, U2, name).await;
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(json["error"]["kind"], "conflict");
        }

        assert!(list(&app, U2, "").await.is_empty());
    }

    #[tokio::test]
    async fn test_rename_surfaces_failed_cleanup() {
        let app = create_app(AppState::for_tests_with_store(Arc::new(
            FailingDeleteStore::new(&["a/id"]),
        )));
        assert_eq!(create(&app, U1, "a").await.0, StatusCode::OK);

        let (status, json) = rename(&app, U1, "id", "b").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["kind"], "internal_server_error");
        assert!(!available(&app, U1, "b").await);
    }

    #[tokio::test]
    async fn test_rename_requires_id_then_name() {
        let app = create_app(AppState::for_tests());

        let (status, json) = rename(&app, U1, "", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "require id");

        let (status, json) = rename(&app, U1, "id", "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "require name");
    }

    #[tokio::test]
    async fn test_rename_unknown_id_creates_item() {
        let app = create_app(AppState::for_tests());

        let (status, json) = rename(&app, U1, "fresh", "z").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "id": "fresh", "name": "z" }));
        assert!(!available(&app, U1, "z").await);
    }

    #[tokio::test]
    async fn test_delete_removes_all_items_sharing_id() {
        let app = create_app(AppState::for_tests());

        assert_eq!(create(&app, U1, "a").await.0, StatusCode::OK);
        assert_eq!(create(&app, U1, "b").await.0, StatusCode::OK);
        assert_eq!(create(&app, U2, "c").await.0, StatusCode::OK);

        let (status, json) = delete(&app, U1, "id").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({}));

        assert!(list(&app, U1, "").await.is_empty());
        assert_eq!(list(&app, U2, "").await.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_surfaces_partial_failure() {
        let app = create_app(AppState::for_tests_with_store(Arc::new(
            FailingDeleteStore::new(&["a/id"]),
        )));
        assert_eq!(create(&app, U1, "a").await.0, StatusCode::OK);
        assert_eq!(create(&app, U1, "c").await.0, StatusCode::OK);

        let (status, json) = delete(&app, U1, "id").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["kind"], "internal_server_error");
        assert_eq!(list(&app, U1, "").await, vec![json!({ "id": "id", "name": "a" })]);
    }

    #[tokio::test]
    async fn test_delete_requires_id() {
        let app = create_app(AppState::for_tests());

        let (status, json) = send(
            &app,
            request("DELETE", &format!("{ROOT}/item"), Some(U1), None),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "require id");
    }

    #[tokio::test]
    async fn test_delete_without_matches_succeeds() {
        let app = create_app(AppState::for_tests());

        let (status, json) = delete(&app, U1, "nothing").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({}));
    }

    #[tokio::test]
    async fn test_full_scenario() {
        let app = create_app(AppState::for_tests());

        let (status, json) = create(&app, U1, "alpha").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "id": "id", "name": "alpha" }));

        assert_eq!(create(&app, U2, "alpha").await.0, StatusCode::CONFLICT);
        assert!(!available(&app, U1, "alpha").await);

        assert_eq!(delete(&app, U1, "id").await.0, StatusCode::OK);
        assert!(list(&app, U1, "").await.is_empty());
        assert!(available(&app, U1, "alpha").await);
    }

    #[tokio::test]
    async fn test_custom_service_root() {
        let config = Config {
            service_name: "notes".to_string(),
            service_version: "v2".to_string(),
            ..Config::default()
        };
        let app = create_app(AppState::for_tests_with(&config));

        let (status, _) = send(
            &app,
            request("GET", "/api/notes/v2/items", Some(U1), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, request("GET", &format!("{ROOT}/items"), Some(U1), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
