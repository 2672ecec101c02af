//! Root and greeting endpoints

use axum::{routing::get, Router};

/// GET /
async fn root() -> &'static str {
    "This is my website!\n"
}

/// GET /hello
async fn hello() -> &'static str {
    "Hello, HTTP!\n"
}

/// Static text routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root)).route("/hello", get(hello))
}
