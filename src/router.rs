//! Radix-tree request router and dispatcher.
//!
//! One tree per HTTP method. O(path-length) lookup. A path that exists under
//! another method answers `405`, an unknown path `404`, both with the same
//! `{"detail": ...}` body the course routes use for their own errors.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use matchit::Router as MatchitRouter;
use tracing::{info, warn};

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

enum Lookup {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed,
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax and are read back with
    /// `req.param("name")`. Static segments win over parameters, so `/create`
    /// and `/{course_id}` coexist.
    ///
    /// # Panics
    ///
    /// Panics if the path is malformed or conflicts with an earlier route.
    /// Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn put(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Put, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, path, handler)
    }

    fn lookup(&self, method: Option<Method>, path: &str) -> Lookup {
        if let Some(method) = method
            && let Some(matched) = self.routes.get(&method).and_then(|tree| tree.at(path).ok())
        {
            let handler = Arc::clone(matched.value);
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Lookup::Found(handler, params);
        }

        if self.routes.values().any(|tree| tree.at(path).is_ok()) {
            Lookup::MethodNotAllowed
        } else {
            Lookup::NotFound
        }
    }

    /// Routes one request and produces one response.
    ///
    /// Never fails: routing misses, unreadable bodies and handler errors all
    /// become HTTP responses. Logs method, path, status and latency.
    pub async fn dispatch<B>(&self, req: http::Request<B>) -> http::Response<Full<Bytes>>
    where
        B: Body<Data = Bytes>,
        B::Error: Display,
    {
        let started = Instant::now();
        let method = Method::try_from(req.method()).ok();
        let wire_method = req.method().clone();
        let path = req.uri().path().to_owned();

        let response = match self.lookup(method, &path) {
            Lookup::Found(handler, params) => {
                let (parts, body) = req.into_parts();
                match body.collect().await {
                    Ok(collected) => {
                        handler.call(Request::new(&parts.uri, collected.to_bytes(), params)).await
                    }
                    Err(e) => {
                        warn!(%path, "failed to read request body: {e}");
                        Response::detail(Status::BadRequest, format!("failed to read request body: {e}"))
                    }
                }
            }
            Lookup::MethodNotAllowed => {
                Response::detail(Status::MethodNotAllowed, Status::MethodNotAllowed.reason())
            }
            Lookup::NotFound => Response::detail(Status::NotFound, Status::NotFound.reason()),
        };

        info!(
            method = %wire_method,
            %path,
            status = u16::from(response.status_code()),
            latency_us = started.elapsed().as_micros() as u64,
            "request handled"
        );

        response.into_inner()
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
