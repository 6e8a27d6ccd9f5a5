//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Every answer the service gives is JSON: either a serialized value through
//! [`Json`] or an error body `{"detail": ...}` through [`Response::detail`].
//! The dispatcher turns the result into a hyper response.

use bytes::Bytes;
use http_body_util::Full;
use serde::Serialize;
use tracing::error;

use crate::status::Status;

const JSON: &str = "application/json";

/// An outgoing JSON response.
///
/// ```rust
/// use course_registry::{Response, Status};
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::detail(Status::NotFound, "No course found with course id 9");
/// ```
#[derive(Debug)]
pub struct Response {
    pub(crate) body: Vec<u8>,
    pub(crate) status: Status,
}

impl Response {
    /// `200 OK` with an already serialized JSON body.
    pub fn json(body: Vec<u8>) -> Self {
        Self { body, status: Status::Ok }
    }

    /// Error body `{"detail": message}` with the given status.
    pub fn detail(code: Status, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let body = serde_json::json!({ "detail": message });
        Self { body: body.to_string().into_bytes(), status: code }
    }

    pub fn status_code(&self) -> Status { self.status }

    /// Converts into the hyper response type.
    pub(crate) fn into_inner(self) -> http::Response<Full<Bytes>> {
        let mut res = http::Response::new(Full::new(Bytes::from(self.body)));
        *res.status_mut() = self.status.into();
        res.headers_mut()
            .insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static(JSON));
        res
    }
}

/// Conversion into an HTTP [`Response`].
///
/// Handlers may return anything implementing it.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response { self }
}

impl<T: IntoResponse, E: IntoResponse> IntoResponse for Result<T, E> {
    fn into_response(self) -> Response {
        match self {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        }
    }
}

/// Serializes the wrapped value as a `200 OK` JSON body.
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::json(bytes),
            Err(e) => {
                error!("failed to serialize response body: {e}");
                Response::detail(Status::InternalServerError, Status::InternalServerError.reason())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn detail_body_is_json() {
        let inner = Response::detail(Status::NotFound, "No course found with course id 9").into_inner();
        assert_eq!(inner.status(), http::StatusCode::NOT_FOUND);
        assert_eq!(inner.headers()["content-type"], JSON);
    }

    #[test]
    fn json_wraps_serialized_value() {
        let res = Json(serde_json::json!({ "id": 5 })).into_response();
        assert_eq!(res.status_code(), Status::Ok);
        assert_eq!(res.body, br#"{"id":5}"#);
    }

    #[test]
    fn unserializable_value_is_500() {
        // JSON object keys must be strings.
        let map: HashMap<(u8, u8), u8> = HashMap::from([((1, 2), 3)]);
        let res = Json(map).into_response();
        assert_eq!(res.status_code(), Status::InternalServerError);
    }
}
