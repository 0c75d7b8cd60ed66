use axum::body::Bytes;
use axum_typed_multipart::{FieldData, TryFromMultipart};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entity::{course, video};
use crate::error::AppError;

/// Content type recorded when the client does not declare one for the file part.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Raw multipart body of an upload. Every field is optional so that absence
/// is reported as one `MissingFields` error rather than a per-field rejection.
/// `video` collects every part of that name so a second file is seen, not dropped.
#[derive(TryFromMultipart)]
pub struct UploadVideoForm {
    #[form_data(limit = "unlimited")]
    pub video: Vec<FieldData<Bytes>>,
    pub title: Option<String>,
    #[form_data(field_name = "courseId")]
    pub course_id: Option<String>,
    #[form_data(field_name = "uploaderId")]
    pub uploader_id: Option<String>,
}

/// An upload whose required fields are all present.
#[derive(Debug)]
pub struct VideoUpload {
    pub contents: Bytes,
    pub content_type: String,
    pub title: String,
    pub course_id: String,
    pub uploader_id: String,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl UploadVideoForm {
    /// Check that all four fields were sent. Empty text counts as missing, and a
    /// `video` part without a filename is a plain text field, not a file.
    ///
    /// Exactly one file is accepted; more than one goes down the unexpected path.
    pub fn validate(self) -> Result<VideoUpload, AppError> {
        let mut files: Vec<_> = self
            .video
            .into_iter()
            .filter(|f| f.metadata.file_name.is_some())
            .collect();
        let title = present(self.title);
        let course_id = present(self.course_id);
        let uploader_id = present(self.uploader_id);

        let (Some(video), Some(title), Some(course_id), Some(uploader_id)) =
            (files.pop(), title, course_id, uploader_id)
        else {
            return Err(AppError::MissingFields);
        };
        if !files.is_empty() {
            return Err(AppError::Unexpected(format!(
                "expected one video file, got {}",
                files.len() + 1
            )));
        }

        let content_type = video
            .metadata
            .content_type
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        Ok(VideoUpload {
            contents: video.contents,
            content_type,
            title,
            course_id,
            uploader_id,
        })
    }
}

impl VideoUpload {
    /// Parse the course identifier. Failure is not a validation error: it is
    /// reported through the unexpected-error path.
    ///
    /// Only a whole integer is accepted. A numeric prefix such as `42abc` or
    /// `4.2` is rejected rather than truncated.
    pub fn parsed_course_id(&self) -> Result<i32, AppError> {
        self.course_id.trim().parse::<i32>().map_err(|e| {
            AppError::Unexpected(format!("courseId {:?} is not an integer: {e}", self.course_id))
        })
    }
}

/// Response DTO for a stored video.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VideoResponse {
    #[schema(example = 17)]
    pub id: i32,
    #[schema(example = "Lecture 1")]
    pub title: String,
    /// Generated object name (12-character id plus `.mp4`).
    #[schema(example = "V1StGXR8_Z5j.mp4")]
    pub filename: String,
    /// Size in bytes.
    #[schema(example = 10485760)]
    pub size: i64,
    #[schema(example = 42)]
    pub course_id: i32,
    #[schema(example = "user-7")]
    pub uploader_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<video::Model> for VideoResponse {
    fn from(model: video::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            filename: model.filename,
            size: model.size,
            course_id: model.course_id,
            uploader_id: model.uploader_id,
            created_at: model.created_at,
        }
    }
}

/// Response DTO for a course after its counter was bumped.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CourseResponse {
    #[schema(example = 42)]
    pub course_id: i32,
    #[schema(example = 5)]
    pub video_count: i32,
}

impl From<course::Model> for CourseResponse {
    fn from(model: course::Model) -> Self {
        Self {
            course_id: model.course_id,
            video_count: model.video_count,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UploadVideoResponse {
    #[schema(example = "Video uploaded successfully")]
    pub message: String,
    pub video: VideoResponse,
    pub course: CourseResponse,
}
