use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::entity::{course, video};

/// Fields of a video row that the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    pub title: String,
    pub filename: String,
    pub size: i64,
    pub course_id: i32,
    pub uploader_id: String,
}

/// Relational side of an upload: the video row and the course counter.
///
/// The two calls are independent writes. Callers that need both to land
/// together must not assume this trait provides it.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    /// Insert a video row and return it as stored.
    async fn create_video(&self, video: NewVideo) -> Result<video::Model, DbErr>;

    /// Atomically add one to `course.video_count` and return the updated course.
    ///
    /// Fails with `DbErr::RecordNotFound` when the course does not exist.
    async fn increment_course_video_count(&self, course_id: i32) -> Result<course::Model, DbErr>;
}

/// `VideoCatalog` backed by a sea-orm connection pool.
pub struct SeaOrmCatalog {
    db: DatabaseConnection,
}

impl SeaOrmCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VideoCatalog for SeaOrmCatalog {
    async fn create_video(&self, new_video: NewVideo) -> Result<video::Model, DbErr> {
        video::ActiveModel {
            title: Set(new_video.title),
            filename: Set(new_video.filename),
            size: Set(new_video.size),
            course_id: Set(new_video.course_id),
            uploader_id: Set(new_video.uploader_id),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    async fn increment_course_video_count(&self, course_id: i32) -> Result<course::Model, DbErr> {
        // Single UPDATE ... RETURNING so concurrent uploads never lose an increment.
        let updated = course::Entity::update_many()
            .col_expr(
                course::Column::VideoCount,
                Expr::col(course::Column::VideoCount).add(1),
            )
            .filter(course::Column::CourseId.eq(course_id))
            .exec_with_returning(&self.db)
            .await?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| DbErr::RecordNotFound(format!("course {course_id} not found")))
    }
}
