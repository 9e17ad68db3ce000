use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::AccountRole;
use crate::model::Fandom::FandomModerator;
use crate::model::Post::{PostCore, PostStatus};

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    post_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let post_id = post_id.into_inner();

    if post_id.len() == 0 {
        return Ok(Response::bad_request("post id required"));
    }

    let db = &state.db;

    //finding the post
    let collection = db.collection::<PostCore>("post_core");
    let result = collection.find_one(
        doc!{
            "uuid": &post_id,
            "status": PostStatus::Active.to_string(),
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("post not found"));
    }

    let post = option.unwrap();

    //owner, platform admin, or a moderator of the owning fandom
    let mut allowed = post.owner == user_id
        || user.role == AccountRole::Administrator;

    if !allowed {
        let collection = db.collection::<FandomModerator>("fandom_moderator");
        let result = collection.count_documents(doc!{
            "fandom_id": &post.fandom_id,
            "user_id": &user_id,
        }).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        allowed = result.unwrap() > 0;
    }

    if !allowed {
        return Ok(Response::forbidden(
            "You are not authorized to delete this post"
        ));
    }

    let collection = db.collection::<PostCore>("post_core");
    let now = Utc::now().timestamp_millis();
    let result = collection.update_one(
        doc!{"uuid": &post_id},
        doc!{"$set": {
            "status": PostStatus::Deleted.to_string(),
            "deleted_at": now,
            "modified_at": now,
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().matched_count == 0 {
        return Ok(Response::not_found("post not found"));
    }

    Ok(HttpResponse::Ok().content_type("application/json").json(
        Response { message: "Successfully Deleted".to_string() }
    ))
}
