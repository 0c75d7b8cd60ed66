use crate::common::{TestApp, routes};

#[tokio::test]
async fn root_reports_liveness() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::ROOT).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.text, "Video Upload API is running");
}

#[tokio::test]
async fn openapi_document_lists_upload_route() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;

    assert_eq!(res.status, 200);
    assert!(
        res.body["paths"]
            .get("/api/upload-video/upload")
            .is_some(),
        "{}",
        res.text
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/upload-video/list").await;

    assert_eq!(res.status, 404);
}
