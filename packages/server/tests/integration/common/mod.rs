pub mod memory;

use std::net::SocketAddr;
use std::sync::Arc;

use lectern_common::StorageConfig;
use lectern_server::config::{AppConfig, CorsConfig, DatabaseConfig, ServerConfig, UploadConfig};
use lectern_server::state::AppState;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use memory::{MemoryCatalog, MemoryObjectStore};

/// Course that every test app starts with.
pub const COURSE_ID: i32 = 42;
/// `video_count` of [`COURSE_ID`] before any upload.
pub const INITIAL_VIDEO_COUNT: i32 = 3;

pub mod routes {
    pub const ROOT: &str = "/";
    pub const UPLOAD: &str = "/api/upload-video/upload";
    pub const OPENAPI: &str = "/api-docs/openapi.json";
}

/// A running test server backed by in-memory stores.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryObjectStore>,
    pub catalog: Arc<MemoryCatalog>,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

/// Multipart fields of an upload; `None` leaves the field out of the request.
#[derive(Clone)]
pub struct UploadFields {
    pub video: Option<Vec<u8>>,
    pub title: Option<String>,
    pub course_id: Option<String>,
    pub uploader_id: Option<String>,
}

impl UploadFields {
    /// A complete, valid upload for [`COURSE_ID`].
    pub fn valid(video: &[u8]) -> Self {
        Self {
            video: Some(video.to_vec()),
            title: Some("Lecture 1".into()),
            course_id: Some(COURSE_ID.to_string()),
            uploader_id: Some("user-7".into()),
        }
    }

    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        if let Some(bytes) = self.video {
            let part = Part::bytes(bytes)
                .file_name("lecture.mov")
                .mime_str("video/mp4")
                .expect("Failed to set MIME type");
            form = form.part("video", part);
        }
        if let Some(title) = self.title {
            form = form.text("title", title);
        }
        if let Some(course_id) = self.course_id {
            form = form.text("courseId", course_id);
        }
        if let Some(uploader_id) = self.uploader_id {
            form = form.text("uploaderId", uploader_id);
        }
        form
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig {
                allow_origins: vec!["http://localhost:3000".to_string()],
            },
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
        },
        storage: StorageConfig {
            bucket: "test-bucket".to_string(),
            ..Default::default()
        },
        upload: UploadConfig::default(),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn with a configuration adjusted by `configure`.
    pub async fn spawn_with(configure: impl FnOnce(&mut AppConfig)) -> Self {
        let mut config = test_config();
        configure(&mut config);

        let store = Arc::new(MemoryObjectStore::default());
        let catalog = Arc::new(MemoryCatalog::default());
        catalog.add_course(COURSE_ID, INITIAL_VIDEO_COUNT);

        let state = AppState {
            config,
            object_store: store.clone(),
            catalog: catalog.clone(),
        };

        let app = lectern_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            store,
            catalog,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn upload(&self, fields: UploadFields) -> TestResponse {
        let res = self
            .client
            .post(self.url(routes::UPLOAD))
            .multipart(fields.into_form())
            .send()
            .await
            .expect("Failed to send multipart upload request");

        TestResponse::from_response(res).await
    }

    pub async fn upload_form(&self, form: Form) -> TestResponse {
        let res = self
            .client
            .post(self.url(routes::UPLOAD))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart upload request");

        TestResponse::from_response(res).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// The `error` message of a failure response.
    pub fn error(&self) -> &str {
        self.body["error"]
            .as_str()
            .expect("response body should contain 'error'")
    }
}
