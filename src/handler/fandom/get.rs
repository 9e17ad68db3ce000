use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Fandom::{FandomCore, FandomStat, FandomMember, FandomModerator};

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    fandom_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let fandom_id = fandom_id.into_inner();

    let db = &state.db;

    let collection = db.collection::<FandomCore>("fandom_core");
    let result = collection.find_one(doc!{ "uuid": &fandom_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("fandom not found"));
    }

    let fandom_core = option.unwrap();

    let collection = db.collection::<FandomStat>("fandom_stat");
    let result = collection.find_one(doc!{ "uuid": &fandom_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("fandom stat not found"));
    }

    let fandom_stat = option.unwrap();

    // Check membership
    let collection = db.collection::<FandomMember>("fandom_member");
    let result = collection.count_documents(doc!{
        "fandom_id": &fandom_id,
        "user_id": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let is_member = result.unwrap() > 0;

    // Check moderator
    let collection = db.collection::<FandomModerator>("fandom_moderator");
    let result = collection.count_documents(doc!{
        "fandom_id": &fandom_id,
        "user_id": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let is_moderator = result.unwrap() > 0;

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "core": json!({
                "uuid": &fandom_core.uuid,
                "name": &fandom_core.name,
                "tag_name": &fandom_core.tag_name,
                "description": &fandom_core.description,
                "created_at": &fandom_core.created_at,
            }),
            "stat": json!({
                "member_count": &fandom_stat.member_count,
                "post_count": &fandom_stat.post_count,
            }),
            "meta": json!({
                "is_member": is_member,
                "is_moderator": is_moderator,
            }),
        }))
    )
}
