//! In-memory course registry.
//!
//! [`Registry`] is the plain data structure: an id index over every stored
//! course plus the high-water mark used to hand out new ids. [`Courses`] is
//! the handle the HTTP layer shares across connection tasks. It owns the
//! registry behind a read/write lock, so every read-modify-write step
//! (max-then-insert, find-then-mutate, find-then-remove) runs under one
//! write guard.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::course::{Course, CourseId, NewCourse};

/// Failures raised by registry operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("No course found with course id {id}")]
    NotFound { id: CourseId },

    #[error("duplicate course id {id} in seed data")]
    DuplicateId { id: CourseId },

    #[error("course ids exhausted: {last} is the largest id a course can have")]
    IdsExhausted { last: CourseId },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Courses keyed by id.
///
/// Ids handed out by [`create`](Registry::create) only ever grow, so id
/// order is also insertion order.
#[derive(Debug, Default)]
pub struct Registry {
    courses: BTreeMap<CourseId, Course>,
    // Largest id ever stored, at least 0. Never decreases, so deleted ids
    // stay retired.
    high_water: CourseId,
}

impl Registry {
    /// An empty registry. The first course created gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from seed data, keeping the ids as given.
    pub fn with_courses(seed: impl IntoIterator<Item = Course>) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for course in seed {
            let id = course.id;
            if registry.courses.insert(id, course).is_some() {
                return Err(RegistryError::DuplicateId { id });
            }
            registry.high_water = registry.high_water.max(id);
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn list_all(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }

    pub fn get_by_id(&self, id: CourseId) -> RegistryResult<Course> {
        self.courses.get(&id).cloned().ok_or(RegistryError::NotFound { id })
    }

    /// Courses whose title contains `fragment`. Case-sensitive; `""` matches all.
    pub fn search_by_title(&self, fragment: &str) -> Vec<Course> {
        self.courses
            .values()
            .filter(|course| course.title.contains(fragment))
            .cloned()
            .collect()
    }

    /// Stores `course` under the next free id and returns the stored record.
    ///
    /// Fails with `IdsExhausted` once the high-water mark is `CourseId::MAX`,
    /// which only a seed can reach.
    pub fn create(&mut self, course: NewCourse) -> RegistryResult<Course> {
        let id = self
            .high_water
            .checked_add(1)
            .ok_or(RegistryError::IdsExhausted { last: self.high_water })?;
        self.high_water = id;
        let stored = Course { id, title: course.title, description: course.description };
        self.courses.insert(id, stored.clone());
        debug!(id, "course created");
        Ok(stored)
    }

    /// Overwrites title and description in place. The id never changes.
    pub fn update(&mut self, id: CourseId, course: NewCourse) -> RegistryResult<Course> {
        let stored = self.courses.get_mut(&id).ok_or(RegistryError::NotFound { id })?;
        stored.title = course.title;
        stored.description = course.description;
        debug!(id, "course updated");
        Ok(stored.clone())
    }

    /// Removes and returns the course.
    pub fn delete(&mut self, id: CourseId) -> RegistryResult<Course> {
        let removed = self.courses.remove(&id).ok_or(RegistryError::NotFound { id })?;
        debug!(id, "course deleted");
        Ok(removed)
    }
}

/// Cloneable, lock-guarded handle to a [`Registry`].
///
/// Clones share the same registry. Reads take the read lock, mutations the
/// write lock; no guard is held across an `.await` other than acquiring it.
#[derive(Clone, Debug, Default)]
pub struct Courses {
    inner: Arc<RwLock<Registry>>,
}

impl Courses {
    pub fn new(registry: Registry) -> Self {
        Self { inner: Arc::new(RwLock::new(registry)) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn list_all(&self) -> Vec<Course> {
        self.inner.read().await.list_all()
    }

    pub async fn get_by_id(&self, id: CourseId) -> RegistryResult<Course> {
        self.inner.read().await.get_by_id(id)
    }

    pub async fn search_by_title(&self, fragment: &str) -> Vec<Course> {
        self.inner.read().await.search_by_title(fragment)
    }

    pub async fn create(&self, course: NewCourse) -> RegistryResult<Course> {
        self.inner.write().await.create(course)
    }

    pub async fn update(&self, id: CourseId, course: NewCourse) -> RegistryResult<Course> {
        self.inner.write().await.update(id, course)
    }

    pub async fn delete(&self, id: CourseId) -> RegistryResult<Course> {
        self.inner.write().await.delete(id)
    }
}
