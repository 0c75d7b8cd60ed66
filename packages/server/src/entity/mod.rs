pub mod course;
pub mod video;
