//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body, decoded regardless of `Content-Type`.
///
/// Only the first JSON value is read; anything after it is ignored.
/// Unlike `axum::Json`, every failure (missing header included) is a 400
/// whose body is the decoder's message. An empty body reports `EOF`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;

        match serde_json::Deserializer::from_slice(&bytes)
            .into_iter::<T>()
            .next()
        {
            Some(Ok(value)) => Ok(Self(value)),
            Some(Err(e)) => Err(ApiError::MalformedBody(e.to_string())),
            None => Err(ApiError::MalformedBody("EOF".to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let JsonBody(named) = JsonBody::<Named>::from_request(request(r#"{"name":"a"}"#), &())
            .await
            .unwrap();
        assert_eq!(named.name, "a");
    }

    #[tokio::test]
    async fn syntax_error_carries_decoder_message() {
        let Err(ApiError::MalformedBody(message)) =
            JsonBody::<Named>::from_request(request("{not json"), &()).await
        else {
            panic!("expected MalformedBody");
        };
        assert!(message.contains("line 1"));
    }

    #[tokio::test]
    async fn empty_body_is_rejected() {
        for body in ["", "  \n"] {
            let result = JsonBody::<Named>::from_request(request(body), &()).await;
            assert!(matches!(result, Err(ApiError::MalformedBody(m)) if m == "EOF"));
        }
    }

    #[tokio::test]
    async fn only_first_value_is_decoded() {
        let JsonBody(named) =
            JsonBody::<Named>::from_request(request(r#"{"name":"a"} {"name":"b"} junk"#), &())
                .await
                .unwrap();
        assert_eq!(named.name, "a");
    }
}
