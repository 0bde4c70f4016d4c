//! Fixture HTTP server for fetch-core's integration tests.
//!
//! Serves a fixed nested-JSON payload, echoes POSTed JSON back, and exposes
//! a route whose body is plain HTML rather than JSON. Unknown routes get
//! axum's default empty 404, which the tests use for status validation.

use axum::{response::Html, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// The `/posts` GET payload: two keypath-addressable arrays plus a nested
/// object two levels deep.
pub fn posts_payload() -> Value {
    json!({
        "users": [{"userId": 32}, {"userId": 2}],
        "colors": [{"name": "blue"}, {"name": "red"}],
        "user": {"name": {"firstname": "henning", "lastname": "mankel"}}
    })
}

pub fn app() -> Router {
    Router::new()
        .route("/posts", get(get_posts).post(echo))
        .route("/badjson", get(bad_json))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_posts() -> Json<Value> {
    Json(posts_payload())
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

async fn bad_json() -> Html<&'static str> {
    Html("this is not json")
}
