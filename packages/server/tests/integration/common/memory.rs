use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use lectern_common::storage::{ObjectStore, StorageError};
use lectern_server::catalog::{NewVideo, VideoCatalog};
use lectern_server::entity::{course, video};
use sea_orm::DbErr;

/// An object as the in-memory store received it.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// In-memory `ObjectStore` that can be told to fail.
#[derive(Default)]
pub struct MemoryObjectStore {
    objects: Mutex<HashMap<String, StoredObject>>,
    put_calls: AtomicUsize,
    fail_puts: AtomicBool,
}

impl MemoryObjectStore {
    pub fn fail_puts(&self) {
        self.fail_puts.store(true, Ordering::SeqCst);
    }

    /// Number of `put` calls, failed ones included.
    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(StorageError::Rejected { status: 503 });
        }

        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                data: data.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}

#[derive(Default)]
struct CatalogState {
    courses: HashMap<i32, i32>,
    videos: Vec<video::Model>,
}

/// In-memory `VideoCatalog` with failure injection for either write.
#[derive(Default)]
pub struct MemoryCatalog {
    state: Mutex<CatalogState>,
    write_calls: AtomicUsize,
    fail_create: AtomicBool,
    fail_increment: AtomicBool,
}

impl MemoryCatalog {
    pub fn add_course(&self, course_id: i32, video_count: i32) {
        self.state
            .lock()
            .unwrap()
            .courses
            .insert(course_id, video_count);
    }

    pub fn fail_create(&self) {
        self.fail_create.store(true, Ordering::SeqCst);
    }

    pub fn fail_increment(&self) {
        self.fail_increment.store(true, Ordering::SeqCst);
    }

    /// Number of write calls of either kind, failed ones included.
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn video_count(&self, course_id: i32) -> Option<i32> {
        self.state.lock().unwrap().courses.get(&course_id).copied()
    }

    pub fn videos(&self) -> Vec<video::Model> {
        self.state.lock().unwrap().videos.clone()
    }
}

#[async_trait]
impl VideoCatalog for MemoryCatalog {
    async fn create_video(&self, new_video: NewVideo) -> Result<video::Model, DbErr> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(DbErr::Custom("connection closed".into()));
        }

        let mut state = self.state.lock().unwrap();
        if !state.courses.contains_key(&new_video.course_id) {
            return Err(DbErr::Custom(format!(
                "insert violates foreign key: course {} does not exist",
                new_video.course_id
            )));
        }

        let model = video::Model {
            id: state.videos.len() as i32 + 1,
            title: new_video.title,
            filename: new_video.filename,
            size: new_video.size,
            course_id: new_video.course_id,
            uploader_id: new_video.uploader_id,
            created_at: Utc::now(),
        };
        state.videos.push(model.clone());
        Ok(model)
    }

    async fn increment_course_video_count(&self, course_id: i32) -> Result<course::Model, DbErr> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_increment.load(Ordering::SeqCst) {
            return Err(DbErr::Custom("deadlock detected".into()));
        }

        let mut state = self.state.lock().unwrap();
        let count = state
            .courses
            .get_mut(&course_id)
            .ok_or_else(|| DbErr::RecordNotFound(format!("course {course_id} not found")))?;
        *count += 1;

        Ok(course::Model {
            course_id,
            video_count: *count,
        })
    }
}
