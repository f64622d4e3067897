use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use primer_core::FrameWaker;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::*;

fn users_json() -> Value {
    json!([
        {"id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "phone": "1-770-736-8031", "website": "hildegard.org"},
        {"id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "phone": "010-692-6593"}
    ])
}

fn app() -> Router {
    Router::new()
        .route("/users", get(|| async { Json(users_json()) }))
        .route(
            "/posts",
            get(|| async {
                Json(json!([{"id": 1, "userId": 1, "title": "first", "body": "hello"}]))
            })
            .post(|Json(body): Json<Value>| async move {
                let mut body = body;
                body["id"] = json!(101);
                (StatusCode::CREATED, Json(body))
            }),
        )
        .route(
            "/users/:id",
            put(|Path(id): Path<u32>, Json(body): Json<Value>| async move {
                let mut body = body;
                body["id"] = json!(id);
                Json(body)
            }),
        )
        .route("/posts/:id", delete(|Path(_id): Path<u32>| async { Json(json!({})) }))
        .route("/broken", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
}

async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

fn client_for(url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig::local(url)).expect("client")
}

#[tokio::test]
async fn fetches_users_with_optional_fields() {
    let url = spawn_server(app()).await;
    let users = client_for(&url).users().await.expect("users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[1].website, "");
}

#[tokio::test]
async fn creates_post_and_reads_back_id() {
    let url = spawn_server(app()).await;
    let created = client_for(&url)
        .create_post(&NewPost {
            title: "t".into(),
            body: "b".into(),
            user_id: 1,
        })
        .await
        .expect("created");
    assert_eq!(created.id, 101);
    assert_eq!(created.user_id, 1);
    assert_eq!(created.title, "t");
}

#[tokio::test]
async fn updates_user() {
    let url = spawn_server(app()).await;
    let user = client_for(&url)
        .update_user(&UserUpdate {
            id: 3,
            name: "Clementine".into(),
            email: "c@example.com".into(),
        })
        .await
        .expect("updated");
    assert_eq!(user.id, 3);
    assert_eq!(user.name, "Clementine");
}

#[tokio::test]
async fn deletes_post() {
    let url = spawn_server(app()).await;
    client_for(&url).delete_post(1).await.expect("deleted");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let url = spawn_server(Router::new()).await;
    let err = client_for(&url).users().await.expect_err("404");
    assert_eq!(err, NetError::Status(404));
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route("/posts", get(|| async { "not json" }));
    let url = spawn_server(router).await;
    let err = client_for(&url).posts().await.expect_err("decode");
    assert!(matches!(err, NetError::Decode(_)), "{err:?}");
}

#[test]
fn backend_completes_requests_and_wakes_runner() {
    let server_rt = tokio::runtime::Runtime::new().expect("runtime");
    let url = server_rt.block_on(spawn_server(app()));

    let (waker, wakes) = FrameWaker::channel();
    let backend = Backend::start(&ApiConfig::local(&url), waker).expect("backend");

    let request = backend.request("users", |client| async move { client.users().await });
    wakes
        .recv_timeout(Duration::from_secs(10))
        .expect("runner woken");

    assert!(!request.is_pending());
    let users = request.try_take().expect("finished").expect("ok");
    assert_eq!(users.len(), 2);
    assert!(request.try_take().is_none());
}

#[test]
fn ready_request_hands_out_result_once() {
    let request: Request<u8> = Request::ready(Err(NetError::Status(500)));
    assert!(!request.is_pending());
    assert_eq!(request.try_take(), Some(Err(NetError::Status(500))));
    assert_eq!(request.try_take(), None);
}
