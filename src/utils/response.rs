use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;
use crate::builtins::sequence::StepFailure;

#[derive(Debug, Serialize)]
pub struct Response {
    pub message: String,
}

impl Response {
    pub fn bad_request(message: &str) -> HttpResponse {
        HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({ "error": message }))
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({ "error": message }))
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        HttpResponse::Forbidden()
            .content_type("application/json")
            .json(json!({ "error": message }))
    }

    pub fn not_found(message: &str) -> HttpResponse {
        HttpResponse::NotFound()
            .content_type("application/json")
            .json(json!({ "error": message }))
    }

    pub fn conflict(message: &str) -> HttpResponse {
        HttpResponse::Conflict()
            .content_type("application/json")
            .json(json!({ "error": message }))
    }

    pub fn internal_server_error(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({ "error": message }))
    }

    //partial multi-write failure: earlier steps stay applied, the payload
    //names the step that broke so the caller can reconcile
    pub fn sequence_failure(failure: &StepFailure) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({
                "error": failure.message,
                "sequence": failure.sequence,
                "failed_step": failure.step,
                "completed_steps": failure.completed,
            }))
    }
}
