use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Either a JSON document or a plain-text message, both with an explicit
/// status code.
#[derive(Debug, Clone)]
pub enum CustomResponse<T> {
    Json(JsonResponse<T>),
    Empty(EmptyResponse),
}

impl<T> CustomResponse<T>
where
    T: Serialize,
{
    pub fn empty(status: StatusCode, message: &str) -> Self {
        CustomResponse::Empty(EmptyResponse {
            status,
            message: message.to_string(),
        })
    }

    pub fn json(status: StatusCode, data: T) -> Self {
        CustomResponse::Json(JsonResponse { status, data })
    }
}

#[derive(Debug, Clone)]
pub struct JsonResponse<T> {
    status: StatusCode,
    data: T,
}

impl<T> IntoResponse for JsonResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

#[derive(Debug, Clone)]
pub struct EmptyResponse {
    status: StatusCode,
    message: String,
}

impl IntoResponse for EmptyResponse {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl<T> IntoResponse for CustomResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match self {
            CustomResponse::Json(json_response) => json_response.into_response(),
            CustomResponse::Empty(empty_response) => empty_response.into_response(),
        }
    }
}
