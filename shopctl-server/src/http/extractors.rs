//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate a numeric id from path
pub struct ValidId(pub i64);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "id",
                    reason: "missing path parameter",
                })
            })?;

        let id = raw.parse::<i64>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })
        })?;

        Ok(Self(id))
    }
}

/// JSON request body; any decode failure becomes a 400 `ApiError`
///
/// The `Content-Type` header is not checked, so `curl -d '{...}'` (which
/// sends a form content type) decodes the same as an explicit JSON request.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        let value = serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest {
            message: e.to_string(),
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        quantity: i32,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn decodes_without_json_content_type() {
        for content_type in [None, Some("application/x-www-form-urlencoded"), Some("text/plain")] {
            let JsonBody(payload) =
                JsonBody::<Payload>::from_request(request(content_type, r#"{"quantity":3}"#), &())
                    .await
                    .unwrap_or_else(|_| panic!("content type {content_type:?} should decode"));
            assert_eq!(payload, Payload { quantity: 3 });
        }
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let result =
            JsonBody::<Payload>::from_request(request(Some("application/json"), "{not json"), &()).await;
        assert!(matches!(result, Err(ApiError::BadRequest { .. })));
    }

    #[tokio::test]
    async fn wrong_field_type_is_bad_request() {
        let result =
            JsonBody::<Payload>::from_request(request(None, r#"{"quantity":"three"}"#), &()).await;
        match result {
            Err(ApiError::BadRequest { message }) => assert!(message.contains("invalid type")),
            _ => panic!("expected BadRequest"),
        }
    }
}
