use crate::errors::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// JSON list, or 204 when there is nothing to list
pub fn list_response<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        no_content_response()
    } else {
        success_response(items)
    }
}

/// Plain-text confirmation with the given status
pub fn confirmation(status: StatusCode, message: impl Into<String>) -> Response {
    (status, message.into()).into_response()
}

/// Created response carrying a confirmation text
pub fn created_response(message: impl Into<String>) -> Response {
    confirmation(StatusCode::CREATED, message)
}

/// JSON body extractor whose rejections use the API's error body
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn empty_lists_have_no_content() {
        let response = list_response(Vec::<u8>::new());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = list_response(vec![1, 2]);
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[1,2]");
    }

    #[tokio::test]
    async fn created_response_is_plain_text() {
        let response = created_response("Recurso creado con éxito.");
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8(body.to_vec()).unwrap(), "Recurso creado con éxito.");
    }
}
