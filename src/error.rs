use std::num::ParseIntError;

use axum::extract::multipart::MultipartError;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{BytesRejection, FormRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("invalid paste id")]
    InvalidId {
        #[from]
        source: ParseIntError,
    },
    #[error("title longer than {max} characters")]
    TitleTooLong { max: usize },
    #[error("content longer than {max} characters")]
    ContentTooLong { max: usize },
    #[error("unsupported content type '{content_type}'")]
    UnsupportedMediaType { content_type: String },
    #[error("error reading form data")]
    Form {
        #[from]
        source: FormRejection,
    },
    #[error("error reading multipart request")]
    MultipartRequest {
        #[from]
        source: MultipartRejection,
    },
    #[error("error reading multipart data")]
    Multipart {
        #[from]
        source: MultipartError,
    },
    #[error("error reading request body")]
    Body {
        #[from]
        source: BytesRejection,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            ApiError::TitleTooLong { .. } => StatusCode::BAD_REQUEST,
            ApiError::ContentTooLong { .. } => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Form { source } => source.status(),
            ApiError::MultipartRequest { source } => source.status(),
            ApiError::Multipart { .. } => StatusCode::BAD_REQUEST,
            ApiError::Body { source } => source.status(),
        };

        (status_code, format!("{self}")).into_response()
    }
}
