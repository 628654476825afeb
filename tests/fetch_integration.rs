//! `HttpFetcher` integration tests against a local HTTP server.

use std::net::SocketAddr;

use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tokio::net::TcpListener;

use veriface::fetch::{FetchError, HttpFetcher, ImageFormat, ResourceFetcher};

async fn serve_jpeg() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/jpeg")],
        &b"\xff\xd8\xff\xe0 fake jpeg body"[..],
    )
}

async fn serve_png_by_header() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "image/png")],
        &b"\x89PNG fake body"[..],
    )
}

async fn serve_error() -> impl IntoResponse {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn spawn_image_server() -> SocketAddr {
    let app = Router::new()
        .route("/photo.jpg", get(serve_jpeg))
        .route("/shot", get(serve_png_by_header))
        .route("/broken", get(serve_error));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    addr
}

#[tokio::test]
async fn test_fetch_materializes_jpeg() {
    let addr = spawn_image_server().await;
    let fetcher = HttpFetcher::new();

    let resource = fetcher
        .fetch(&format!("http://{addr}/photo.jpg"))
        .await
        .expect("fetch succeeds");

    assert_eq!(resource.format(), ImageFormat::Jpeg);
    assert!(resource.path().exists());

    let contents = std::fs::read(resource.path()).expect("read temp file");
    assert_eq!(contents, b"\xff\xd8\xff\xe0 fake jpeg body");
}

#[tokio::test]
async fn test_fetch_infers_png_from_content_type() {
    let addr = spawn_image_server().await;
    let fetcher = HttpFetcher::new();

    // No png marker in the URL; the response header decides.
    let resource = fetcher
        .fetch(&format!("http://{addr}/shot"))
        .await
        .expect("fetch succeeds");

    assert_eq!(resource.format(), ImageFormat::Png);
    assert_eq!(
        resource.path().extension().and_then(|e| e.to_str()),
        Some("png")
    );
}

#[tokio::test]
async fn test_non_success_status_is_a_fetch_error() {
    let addr = spawn_image_server().await;
    let fetcher = HttpFetcher::new();

    let err = fetcher
        .fetch(&format!("http://{addr}/broken"))
        .await
        .expect_err("500 is not a success");

    match err {
        FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_resource_is_a_fetch_error() {
    let addr = spawn_image_server().await;
    let fetcher = HttpFetcher::new();

    let err = fetcher
        .fetch(&format!("http://{addr}/no-such-photo.jpg"))
        .await
        .expect_err("404 is not a success");

    match err {
        FetchError::Status { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_a_request_error() {
    // Bind-then-drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let fetcher = HttpFetcher::new();
    let err = fetcher
        .fetch(&format!("http://{addr}/photo.jpg"))
        .await
        .expect_err("nothing is listening");

    assert!(matches!(err, FetchError::Request { .. }));
}

#[tokio::test]
async fn test_temp_file_removed_on_drop() {
    let addr = spawn_image_server().await;
    let fetcher = HttpFetcher::new();

    let resource = fetcher
        .fetch(&format!("http://{addr}/photo.jpg"))
        .await
        .expect("fetch succeeds");
    let path = resource.path().to_path_buf();
    assert!(path.exists());

    drop(resource);
    assert!(!path.exists());
}
