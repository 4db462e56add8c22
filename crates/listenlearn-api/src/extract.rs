use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body that is also accepted when the `Content-Type` header is absent.
///
/// A body sent with a non-JSON content type, or one that does not decode into `T`, is
/// rejected with `ApiError::InvalidBody` (422).
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Err(ApiError::InvalidBody(
                "expected a JSON request body".to_string(),
            ));
        }

        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::InvalidBody(format!("invalid request body: {e}")))?;
        Ok(Self(value))
    }
}

/// Missing header, `application/json`, or any `application/*+json` subtype.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(content_type: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn missing_content_type_counts_as_json() {
        assert!(is_json_content_type(&headers(None)));
    }

    #[test]
    fn accepts_json_media_types() {
        assert!(is_json_content_type(&headers(Some("application/json"))));
        assert!(is_json_content_type(&headers(Some("Application/JSON; charset=utf-8"))));
        assert!(is_json_content_type(&headers(Some("application/vnd.api+json"))));
    }

    #[test]
    fn rejects_other_media_types() {
        assert!(!is_json_content_type(&headers(Some("text/plain"))));
        assert!(!is_json_content_type(&headers(Some("application/x-www-form-urlencoded"))));
        assert!(!is_json_content_type(&headers(Some("text/json"))));
        assert!(!is_json_content_type(&headers(Some("json"))));
    }
}
