//! The course record and the payload used to create or update one.

use serde::{Deserialize, Serialize};

/// Course identifier. Signed, so any integer a client sends is a valid
/// lookup key; ids the registry assigns are always positive.
pub type CourseId = i64;

/// A course held by the [`Registry`](crate::Registry).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
}

impl Course {
    pub fn new(id: CourseId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id, title: title.into(), description: description.into() }
    }
}

/// Request body for `POST /create` and `PUT /update/{course_id}`.
///
/// Clients usually send a full course object. The `id` is accepted so such
/// bodies deserialize, but the registry never reads it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct NewCourse {
    #[serde(default)]
    pub id: Option<CourseId>,
    pub title: String,
    pub description: String,
}

impl NewCourse {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { id: None, title: title.into(), description: description.into() }
    }
}

/// The four courses a fresh service starts with.
pub fn default_catalogue() -> Vec<Course> {
    vec![
        Course::new(1, "Python Basics", "Python course for beginners"),
        Course::new(2, "Python Advanced", "Python advance course for developers"),
        Course::new(3, "Javascript", "Javascript course from zero to hero"),
        Course::new(4, "React", "Learn React with this fun course"),
    ]
}
