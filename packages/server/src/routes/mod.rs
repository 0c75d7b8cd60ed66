use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

pub fn api_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/upload-video", upload_video_routes(config))
}

fn upload_video_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::upload_video::upload_video))
        .layer(handlers::upload_video::upload_body_limit(
            config.upload.max_body_bytes,
        ))
}
