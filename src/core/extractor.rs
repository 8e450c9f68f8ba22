use axum::{
    body::Body,
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, FromRequest, Multipart, Request,
    },
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::modules::storage::UploadedFile;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> std::result::Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

fn json_rejection_message(rejection: JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
        JsonRejection::MissingJsonContentType(err) => {
            format!("Missing JSON content type: {}", err)
        }
        _ => "Failed to parse JSON body".to_string(),
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        AppError::BadRequest(json_rejection_message(self.0)).into_response()
    }
}

/// Create/update payload sent either as a JSON object or as
/// `multipart/form-data`.
///
/// Multipart text parts become string fields (blank values are dropped) and
/// file parts are held aside until a handler uploads them.
#[derive(Debug, Default)]
pub struct FormPayload {
    fields: Map<String, Value>,
    files: Vec<UploadedFile>,
}

impl FormPayload {
    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn push_file(&mut self, file: UploadedFile) {
        self.files.retain(|f| f.field_name != file.field_name);
        self.files.push(file);
    }

    /// Remove and return the file part named `field`
    pub fn take_file(&mut self, field: &str) -> Option<UploadedFile> {
        let index = self.files.iter().position(|f| f.field_name == field)?;
        Some(self.files.remove(index))
    }

    #[cfg(test)]
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Deserialize the collected fields into `T` and run its validation rules
    pub fn into_validated<T>(self) -> Result<T>
    where
        T: DeserializeOwned + Validate,
    {
        let dto: T = serde_json::from_value(Value::Object(self.fields))
            .map_err(|e| AppError::Validation(vec![e.to_string()]))?;
        dto.validate()?;
        Ok(dto)
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut payload = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            debug!("Failed to read multipart field: {}", e);
            AppError::BadRequest(format!("Failed to read multipart data: {}", e))
        })? {
            let name = field.name().unwrap_or("").to_string();
            if name.is_empty() {
                continue;
            }

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field.bytes().await.map_err(|e| {
                        AppError::BadRequest(format!("Failed to read file '{}': {}", name, e))
                    })?;

                    // Browsers send an empty part for an untouched file input
                    if file_name.is_empty() && data.is_empty() {
                        continue;
                    }

                    payload.push_file(UploadedFile {
                        field_name: name,
                        file_name,
                        content_type,
                        data: data.to_vec(),
                    });
                }
                None => {
                    let text = field.text().await.map_err(|e| {
                        AppError::BadRequest(format!("Failed to read field '{}': {}", name, e))
                    })?;
                    if text.trim().is_empty() {
                        continue;
                    }
                    payload.insert(&name, text);
                }
            }
        }

        Ok(payload)
    }
}

impl<S> FromRequest<S> for FormPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e: MultipartRejection| AppError::BadRequest(e.body_text()))?;
            return Self::from_multipart(multipart).await;
        }

        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(json_rejection_message(e)))?;

        match value {
            Value::Object(fields) => Ok(Self {
                fields,
                files: Vec::new(),
            }),
            _ => Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            )),
        }
    }
}
