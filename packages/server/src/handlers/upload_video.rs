use axum::Json;
use axum::extract::{DefaultBodyLimit, State};
use axum_typed_multipart::BaseMultipart;
use tracing::{Span, info, instrument};

use crate::catalog::NewVideo;
use crate::error::{AppError, ErrorBody};
use crate::models::upload::{UploadVideoForm, UploadVideoResponse};
use crate::state::AppState;
use crate::utils::filename::generate_video_filename;

pub fn upload_body_limit(max_bytes: usize) -> DefaultBodyLimit {
    DefaultBodyLimit::max(max_bytes)
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Videos",
    operation_id = "uploadVideo",
    summary = "Upload a course video",
    description = "Stores the `video` file part in object storage under a generated name, \
        records it against `courseId` and increments that course's video count. \
        The video row and the counter are written separately: a failure of the second \
        write leaves the first in place.",
    request_body(
        content_type = "multipart/form-data",
        description = "Fields `video` (exactly one file), `title`, `courseId`, `uploaderId`. \
            `courseId` must be a whole integer: values such as `42abc` or `4.2` are not \
            truncated and get the unexpected-error response."
    ),
    responses(
        (status = 200, description = "Video stored and recorded", body = UploadVideoResponse),
        (status = 400, description = "A required field is missing", body = ErrorBody),
        (status = 500, description = "Storage, database or unexpected failure, including a \
            malformed `courseId`, more than one `video` file or a body over the size limit", body = ErrorBody),
    ),
)]
#[instrument(skip(state, form), fields(course_id, filename))]
pub async fn upload_video(
    State(state): State<AppState>,
    BaseMultipart { data: form, .. }: BaseMultipart<UploadVideoForm, AppError>,
) -> Result<Json<UploadVideoResponse>, AppError> {
    let upload = form.validate()?;
    let course_id = upload.parsed_course_id()?;

    let filename = generate_video_filename();
    let key = state.config.storage.object_key(&filename);
    let size = upload.contents.len() as i64;

    let span = Span::current();
    span.record("course_id", course_id);
    span.record("filename", filename.as_str());

    state
        .object_store
        .put(&key, &upload.contents, &upload.content_type)
        .await?;
    info!(key = %key, size, content_type = %upload.content_type, "Video stored");

    // The object is already in place; from here on a failure leaves it orphaned.
    let video = state
        .catalog
        .create_video(NewVideo {
            title: upload.title,
            filename,
            size,
            course_id,
            uploader_id: upload.uploader_id,
        })
        .await?;

    let course = state.catalog.increment_course_video_count(course_id).await?;

    info!(
        video_id = video.id,
        video_count = course.video_count,
        "Video recorded"
    );

    Ok(Json(UploadVideoResponse {
        message: "Video uploaded successfully".into(),
        video: video.into(),
        course: course.into(),
    }))
}
