use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Courses are owned by the wider platform; this service only bumps `video_count`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub course_id: i32,

    #[sea_orm(default_value = 0)]
    pub video_count: i32,

    #[sea_orm(has_many)]
    pub videos: HasMany<super::video::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
