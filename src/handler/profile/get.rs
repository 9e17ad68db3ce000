use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::{
    AccountCore,
    AccountProfile,
    AccountSocial,
    AccountFollow,
};

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    target_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let target_id = target_id.into_inner();

    let db = &state.db;

    // Getting core
    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.find_one(doc!{"uuid": &target_id}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("user not found"));
    }

    let account_core = option.unwrap();

    // Getting profile
    let collection = db.collection::<AccountProfile>("account_profile");
    let result = collection.find_one(doc!{"uuid": &target_id}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("user not found"));
    }

    let account_profile = option.unwrap();

    // Getting social
    let collection = db.collection::<AccountSocial>("account_social");
    let result = collection.find_one(doc!{"uuid": &target_id}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("user not found"));
    }

    let account_social = option.unwrap();

    //Check if is following
    let is_following = match user_id == target_id {
        true => false,
        false => {
            let collection = db.collection::<AccountFollow>("account_follow");
            let result = collection.count_documents(doc!{
                "user_id": &target_id,
                "followed_by": &user_id,
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            result.unwrap() > 0
        }
    };

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "core": json!({
                "uuid": &account_core.uuid,
                "username": &account_core.username,
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
            "stat": json!({
                "is_following": is_following,
                "myself": user_id == target_id,
            }),
        }))
    )
}
