use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::{AccountCore, AccountProfile, AccountSocial};

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;

    let db = &state.db;

    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.find_one(doc!{"uuid": &user_id}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("account not found"));
    }

    let account_core = option.unwrap();

    let collection = db.collection::<AccountProfile>("account_profile");
    let result = collection.find_one(doc!{"uuid": &user_id}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("account profile not found"));
    }

    let account_profile = option.unwrap();

    let collection = db.collection::<AccountSocial>("account_social");
    let result = collection.find_one(doc!{"uuid": &user_id}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("account social not found"));
    }

    let account_social = option.unwrap();

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "core": json!({
                "uuid": &account_core.uuid,
                "username": &account_core.username,
                "email_address": &account_core.email_address,
                "role": &account_core.role,
            }),
            "profile": json!({
                "display_name": &account_profile.display_name,
                "biography": &account_profile.biography,
                "profile_verified": &account_profile.profile_verified,
            }),
            "social": json!({
                "follower_count": &account_social.follower_count,
                "following_count": &account_social.following_count,
            }),
        }))
    )
}
