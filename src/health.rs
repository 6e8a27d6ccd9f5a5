//! Liveness and readiness checks.
//!
//! | Probe | Path | Answer |
//! |---|---|---|
//! | **Liveness** | `/healthz` | `{"status":"ok"}` whenever the process can serve HTTP |
//! | **Readiness** | `/readyz` | `{"status":"ready","courses":n}` once the registry is reachable |
//!
//! Both are mounted by [`api::routes`](crate::api::routes).

use serde::Serialize;

use crate::registry::Courses;
use crate::request::Request;
use crate::response::Json;

#[derive(Debug, Serialize)]
pub struct Liveness {
    status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Readiness {
    status: &'static str,
    courses: usize,
}

/// Always `200 OK`. Has no dependencies on purpose.
pub async fn liveness(_req: Request) -> Json<Liveness> {
    Json(Liveness { status: "ok" })
}

/// `200 OK` with the current course count. Taking the read lock proves the
/// registry is not wedged behind a writer.
pub async fn readiness(courses: Courses, _req: Request) -> Json<Readiness> {
    Json(Readiness { status: "ready", courses: courses.len().await })
}
