use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use crate::model::Account::AccountFollow;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};

//live count over the join collection, not the cached social counter
pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    target_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let target_id = target_id.into_inner();

    let db = &state.db;
    let collection = db.collection::<AccountFollow>("account_follow");

    let result = collection.count_documents(doc!{
        "user_id": &target_id
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "follower_count": result.unwrap()
        }))
    )
}
