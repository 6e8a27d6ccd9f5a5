//! Incoming HTTP request type and the typed extractors handlers use on it.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use bytes::Bytes;
use serde::de::DeserializeOwned;

/// What a handler sees of an incoming request: the matched path
/// parameters, the raw query string and the fully buffered body.
pub struct Request {
    pub(crate) query: Option<String>,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(uri: &http::Uri, body: Bytes, params: HashMap<String, String>) -> Self {
        Self { query: uri.query().map(str::to_owned), body, params }
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/update/{course_id}`, `req.param("course_id")` on
    /// `/update/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the first query-string value for `key`, percent-decoded.
    pub fn query(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Parses a required path parameter.
    pub fn path_param<T>(&self, key: &str) -> Result<T, Rejection>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.param(key).ok_or_else(|| Rejection::Missing {
            location: Location::Path,
            name: key.to_owned(),
        })?;
        parse_value(Location::Path, key, raw)
    }

    /// Parses a required query parameter.
    pub fn query_param<T>(&self, key: &str) -> Result<T, Rejection>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.query(key).ok_or_else(|| Rejection::Missing {
            location: Location::Query,
            name: key.to_owned(),
        })?;
        parse_value(Location::Query, key, &raw)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Rejection> {
        serde_json::from_slice(&self.body).map_err(Rejection::Body)
    }
}

fn parse_value<T>(location: Location, name: &str, raw: &str) -> Result<T, Rejection>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse().map_err(|e: T::Err| Rejection::Invalid {
        location,
        name: name.to_owned(),
        value: raw.to_owned(),
        reason: e.to_string(),
    })
}

/// Where a rejected request parameter came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Location {
    Path,
    Query,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Path => "path",
            Self::Query => "query",
        })
    }
}

/// A request that could not be turned into handler input.
///
/// The course routes answer it with `422 Unprocessable Content`.
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    #[error("missing {location} parameter `{name}`")]
    Missing { location: Location, name: String },

    #[error("{location} parameter `{name}` has invalid value {value:?}: {reason}")]
    Invalid { location: Location, name: String, value: String, reason: String },

    #[error("invalid JSON body: {0}")]
    Body(#[source] serde_json::Error),
}
