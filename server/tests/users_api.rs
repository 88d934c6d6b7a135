use reqwest::StatusCode;
use serde_json::{json, Value};

use users_server::repository::InMemoryUserRepository;
use users_server::routes::create_routes;
use users_server::state::AppState;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, backed by the in-memory table.
        let app = create_routes(AppState::new(InMemoryUserRepository::new()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create(&self, body: Value) -> Value {
        let res = self
            .client
            .post(self.url("/users"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        res.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn create_returns_record_with_positive_id() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .post(server.url("/users"))
        .json(&json!({"name": "Ann", "email": "ann@x.com", "age": 30}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let user: Value = res.json().await.unwrap();
    assert!(user["id"].as_i64().unwrap() > 0);
    assert_eq!(user["name"], "Ann");
    assert_eq!(user["email"], "ann@x.com");
    assert_eq!(user["age"], 30);
}

#[tokio::test]
async fn created_ids_are_unique() {
    let server = TestServer::spawn().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let user = server
            .create(json!({"name": format!("user{i}"), "email": "u@x.com", "age": i}))
            .await;
        ids.push(user["id"].as_i64().unwrap());
    }

    let mut deduped = ids.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[tokio::test]
async fn update_then_fetch_shows_new_state() {
    let server = TestServer::spawn().await;
    let user = server
        .create(json!({"name": "Ann", "email": "ann@x.com", "age": 30}))
        .await;
    let id = user["id"].as_i64().unwrap();

    let res = server
        .client
        .put(server.url(&format!("/users/{id}")))
        .json(&json!({"name": "Ann B", "email": "ann@x.com", "age": 31}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert!(res.bytes().await.unwrap().is_empty());

    let fetched: Value = server
        .client
        .get(server.url(&format!("/users/{id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        fetched,
        json!({"id": id, "name": "Ann B", "email": "ann@x.com", "age": 31})
    );
}

#[tokio::test]
async fn list_starts_empty_and_grows() {
    let server = TestServer::spawn().await;

    let res = server.client.get(server.url("/users")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await.unwrap(), json!([]));

    server
        .create(json!({"name": "Ann", "email": "ann@x.com", "age": 30}))
        .await;
    server
        .create(json!({"name": "Bob", "email": "bob@x.com", "age": 41}))
        .await;

    let users: Vec<Value> = server
        .client
        .get(server.url("/users"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn error_statuses() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .get(server.url("/users/999999"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = server
        .client
        .get(server.url("/users/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .client
        .post(server.url("/users"))
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = server
        .client
        .delete(server.url("/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}
