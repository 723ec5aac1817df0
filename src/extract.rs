use axum::async_trait;
use axum::body::{Bytes, HttpBody};
use axum::extract::{FromRequest, Multipart};
use axum::http::{header, Request};
use axum::{BoxError, Form};

use crate::error::ApiError;
use crate::types::api::NewPaste;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Paste fields carried in a request body.
///
/// Accepts urlencoded and multipart forms. A body that is empty yields no
/// fields whatever its content type; anything else is rejected.
#[derive(Debug)]
pub struct PasteBody(pub NewPaste);

#[async_trait]
impl<S, B> FromRequest<S, B> for PasteBody
where
    B: HttpBody + Send + 'static,
    B::Data: Into<Bytes> + Send,
    B::Error: Into<BoxError>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let essence = content_type
            .as_deref()
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase());

        match essence.as_deref() {
            Some(FORM_URLENCODED) => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
                Ok(PasteBody(NewPaste::from_pairs(pairs)))
            }
            Some(MULTIPART_FORM_DATA) => {
                let mut multipart = Multipart::from_request(req, state).await?;
                let mut pairs = Vec::new();
                while let Some(field) = multipart.next_field().await? {
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    pairs.push((name, field.text().await?));
                }
                Ok(PasteBody(NewPaste::from_pairs(pairs)))
            }
            _ => {
                let body = Bytes::from_request(req, state).await?;
                if body.is_empty() {
                    Ok(PasteBody(NewPaste::default()))
                } else {
                    Err(ApiError::UnsupportedMediaType {
                        content_type: content_type.unwrap_or_default(),
                    })
                }
            }
        }
    }
}
