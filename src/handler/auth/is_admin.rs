use serde_json::json;
use crate::BuiltIns::state::AppState;
use crate::model::Account::AccountRole;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "is_admin": user.role == AccountRole::Administrator
        }))
    )
}
