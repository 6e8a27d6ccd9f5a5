//! # course-registry
//!
//! An in-memory course registry served over HTTP.
//!
//! Courses (`id`, `title`, `description`) live in a [`Registry`] behind a
//! lock-guarded [`Courses`] handle. Nothing is persisted: a restart brings
//! back the seed data and nothing else.
//!
//! The HTTP layer is deliberately small:
//!
//! - Radix-tree routing, one tree per method, via [`matchit`]
//! - hyper for HTTP/1.1 and HTTP/2, one tokio task per connection
//! - Graceful shutdown on SIGTERM / Ctrl-C, draining in-flight requests
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use course_registry::{Courses, Registry, Server, api, default_catalogue};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let courses = Courses::new(Registry::with_courses(default_catalogue())?);
//!     Server::bind(([127, 0, 0, 1], 8000).into())
//!         .serve(api::routes(courses))
//!         .await?;
//!     Ok(())
//! }
//! ```

mod course;
mod error;
mod handler;
mod method;
mod registry;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod config;
pub mod health;
pub mod logging;

pub use course::{Course, CourseId, NewCourse, default_catalogue};
pub use error::{Error, Result};
pub use handler::{Handler, with_state};
pub use method::{Method, UnknownMethod};
pub use registry::{Courses, Registry, RegistryError, RegistryResult};
pub use request::{Location, Rejection, Request};
pub use response::{IntoResponse, Json, Response};
pub use router::Router;
pub use server::Server;
pub use status::Status;
