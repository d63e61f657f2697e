use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Body of successful writes: `{statusCode, message, data}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

pub fn envelope<T: Serialize>(status: StatusCode, message: &str, data: T) -> Response {
    let body = Envelope {
        status_code: status.as_u16(),
        message: message.to_string(),
        data,
    };
    (status, Json(body)).into_response()
}
