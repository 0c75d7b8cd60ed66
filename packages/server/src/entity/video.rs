use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "video")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    /// Generated object name, e.g. `V1StGXR8_Z5j.mp4`.
    #[sea_orm(unique)]
    pub filename: String,

    /// Payload size in bytes.
    pub size: i64,

    pub course_id: i32,
    #[sea_orm(belongs_to, from = "course_id", to = "course_id")]
    pub course: HasOne<super::course::Entity>,

    /// Opaque identifier of the uploading user.
    pub uploader_id: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
