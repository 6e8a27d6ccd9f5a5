//! Course routes.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`list_courses`] |
//! | GET | `/{course_id}` | [`get_course`] |
//! | GET | `/courses/?title=...` | [`search_courses`] |
//! | POST | `/create` | [`create_course`] |
//! | PUT | `/update/{course_id}` | [`update_course`] |
//! | DELETE | `/delete?course_id=...` | [`delete_course`] |
//!
//! Plus the `/healthz` and `/readyz` checks from [`health`](crate::health).
//! Every error is a JSON `{"detail": ...}` body.

use tracing::info;

use crate::course::{Course, CourseId, NewCourse};
use crate::handler::with_state;
use crate::health;
use crate::registry::{Courses, RegistryError};
use crate::request::{Rejection, Request};
use crate::response::{IntoResponse, Json, Response};
use crate::router::Router;
use crate::status::Status;

/// Failure of a course route.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn status(&self) -> Status {
        match self {
            Self::Registry(RegistryError::NotFound { .. }) => Status::NotFound,
            // DuplicateId is only raised while seeding; IdsExhausted means the
            // registry itself can take no more courses.
            Self::Registry(RegistryError::DuplicateId { .. } | RegistryError::IdsExhausted { .. }) => {
                Status::InternalServerError
            }
            Self::Rejected(_) => Status::UnprocessableContent,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        Response::detail(self.status(), self.to_string())
    }
}

/// Builds the router serving every course route over `courses`.
pub fn routes(courses: Courses) -> Router {
    Router::new()
        .get("/", with_state(courses.clone(), list_courses))
        .get("/{course_id}", with_state(courses.clone(), get_course))
        .get("/courses/", with_state(courses.clone(), search_courses))
        .get("/courses", with_state(courses.clone(), search_courses))
        .post("/create", with_state(courses.clone(), create_course))
        .put("/update/{course_id}", with_state(courses.clone(), update_course))
        .delete("/delete", with_state(courses.clone(), delete_course))
        .get("/healthz", health::liveness)
        .get("/readyz", with_state(courses, health::readiness))
}

/// `GET /`
pub async fn list_courses(courses: Courses, _req: Request) -> Json<Vec<Course>> {
    Json(courses.list_all().await)
}

/// `GET /{course_id}`
pub async fn get_course(courses: Courses, req: Request) -> ApiResult<Json<Course>> {
    let id: CourseId = req.path_param("course_id")?;
    Ok(Json(courses.get_by_id(id).await?))
}

/// `GET /courses/?title=...`
///
/// Matches courses whose title contains the fragment, case-sensitively.
pub async fn search_courses(courses: Courses, req: Request) -> ApiResult<Json<Vec<Course>>> {
    let title: String = req.query_param("title")?;
    Ok(Json(courses.search_by_title(&title).await))
}

/// `POST /create`. Any `id` in the body is ignored.
pub async fn create_course(courses: Courses, req: Request) -> ApiResult<Json<Course>> {
    let input: NewCourse = req.json()?;
    let course = courses.create(input).await?;
    info!(id = course.id, title = %course.title, "course created");
    Ok(Json(course))
}

/// `PUT /update/{course_id}`
pub async fn update_course(courses: Courses, req: Request) -> ApiResult<Json<Course>> {
    let id: CourseId = req.path_param("course_id")?;
    let input: NewCourse = req.json()?;
    let course = courses.update(id, input).await?;
    info!(id, "course updated");
    Ok(Json(course))
}

/// `DELETE /delete?course_id=...` returns the removed course.
pub async fn delete_course(courses: Courses, req: Request) -> ApiResult<Json<Course>> {
    let id: CourseId = req.query_param("course_id")?;
    let course = courses.delete(id).await?;
    info!(id, "course deleted");
    Ok(Json(course))
}
