// ==================== RESPONSE PLUMBING ====================
// Single exit point for every handler: serialize once, log the outcome,
// stamp the JSON content type. Decode failures from `web::Json` are routed
// through `json_error_handler` so they share the same shape and logging.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::utils::error::AppError;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
}

/// Canonical error envelope: `{"error": {"message": ..., "code": ...}}`.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Writes `body` as the JSON response and logs `status + serialized body`.
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    let serialized = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    log::info!("📤 Status: {} - Response: {}", status.as_u16(), serialized);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(serialized)
}

/// Empty-body response, still typed as JSON and still logged.
pub fn empty(status: StatusCode) -> HttpResponse {
    log::info!("📤 Status: {} - Response: (empty)", status.as_u16());
    HttpResponse::build(status)
        .content_type("application/json")
        .finish()
}

pub fn error(err: &AppError) -> HttpResponse {
    json(
        err.status(),
        &ErrorResponse {
            error: ErrorBody {
                message: err.message().to_string(),
                code: err.code().to_string(),
            },
        },
    )
}

/// Installed on `web::JsonConfig` in `main`: any body that fails to decode
/// answers with the `unexpected_error` envelope, and the underlying decoder
/// failure lands in the log instead of the client payload.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::error!("❌ Decoder failed on {} {}: {}", req.method(), req.path(), err);
    let response = error(&AppError::Decode(err.to_string()));
    InternalError::from_response(err, response).into()
}
