use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::AccountRole;
use crate::model::Comment::{CommentCore, CommentStatus};

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    comment_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let comment_id = comment_id.into_inner();

    if comment_id.len() == 0 {
        return Ok(Response::bad_request("comment id required"));
    }

    let db = &state.db;

    //finding the comment
    let collection = db.collection::<CommentCore>("comment_core");
    let result = collection.find_one(doc!{
        "uuid": &comment_id,
        "status": CommentStatus::Active.to_string(),
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("comment not found"));
    }

    let comment = option.unwrap();

    if comment.owner != user_id && user.role != AccountRole::Administrator {
        return Ok(Response::forbidden(
            "You are not authorized to delete this comment"
        ));
    }

    let now = Utc::now().timestamp_millis();
    let result = collection.update_one(
        doc!{"uuid": &comment_id},
        doc!{"$set": {
            "status": CommentStatus::Deleted.to_string(),
            "deleted_at": now,
            "modified_at": now,
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().matched_count == 0 {
        return Ok(Response::not_found("comment not found"));
    }

    Ok(HttpResponse::Ok().content_type("application/json").json(
        Response { message: "Successfully Deleted".to_string() }
    ))
}
