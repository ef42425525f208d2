use std::convert::Infallible;

use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Query, Request},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{names, rejections::AppError};

/// JSON body extractor whose failures (missing content type, malformed JSON,
/// missing or mistyped fields) all surface as a bad request.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(JsonBody(body)),
            Err(rejection) => {
                tracing::debug!("could not decode request body: {rejection}");
                Err(AppError::Input("malformed request body"))
            }
        }
    }
}

/// Numeric `{id}` path segment. A segment that is not an integer cannot name
/// any record, so it is answered as not found.
pub struct Id(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for Id {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;
        Ok(Id(id))
    }
}

#[derive(Deserialize)]
struct PageParams {
    page: Option<String>,
}

/// The `page` query parameter. Absent or non-integer values fall back to the
/// first page.
pub struct PageNumber(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for PageNumber {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = Query::<PageParams>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(params)| params.page);
        Ok(PageNumber(parse_page(raw.as_deref())))
    }
}

fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|v| v.trim().parse().ok())
        .unwrap_or(names::DEFAULT_PAGE)
}

/// Deserialize a value that may be either a JSON number or a string containing a number.
/// Browser forms commonly send numeric fields as strings.
pub fn deserialize_string_or_i64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("integer or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Numeric {
        #[serde(deserialize_with = "deserialize_string_or_i64")]
        value: i64,
    }

    fn numeric(json: &str) -> Result<i64, serde_json::Error> {
        serde_json::from_str::<Numeric>(json).map(|n| n.value)
    }

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        assert_eq!(numeric(r#"{"value": 4}"#).unwrap(), 4);
        assert_eq!(numeric(r#"{"value": "4"}"#).unwrap(), 4);
        assert_eq!(numeric(r#"{"value": " 12 "}"#).unwrap(), 12);
        assert_eq!(numeric(r#"{"value": -2}"#).unwrap(), -2);
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        assert!(numeric(r#"{"value": "four"}"#).is_err());
        assert!(numeric(r#"{"value": 1.5}"#).is_err());
        assert!(numeric(r#"{"value": null}"#).is_err());
        assert!(numeric(r#"{}"#).is_err());
    }

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some("-1")), -1);
    }
}
