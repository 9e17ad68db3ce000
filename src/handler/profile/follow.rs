use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::{AccountCore, AccountFollow, AccountSocial};

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

    if user_id == target_id {
        return Ok(Response::bad_request("You cannot follow yourself"));
    }

    let db = &state.db;

    //finding the target account
    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.count_documents(doc!{"uuid": &target_id}).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() == 0 {
        return Ok(Response::not_found("user not found"));
    }

    let collection = db.collection::<AccountFollow>("account_follow");
    let result = collection.count_documents(doc!{
        "user_id": &target_id,
        "followed_by": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() > 0 {
        return Ok(Response::conflict("Already following this user"));
    }

    let now = Utc::now().timestamp_millis();

    let result = collection.insert_one(AccountFollow {
        user_id: target_id.clone(),
        followed_by: user_id.clone(),
        followed_at: now,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // Update both social counters
    let collection = db.collection::<AccountSocial>("account_social");
    let result = collection.update_one(
        doc!{ "uuid": &target_id },
        doc!{
            "$inc":{ "follower_count": 1 },
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let result = collection.update_one(
        doc!{ "uuid": &user_id },
        doc!{
            "$inc":{ "following_count": 1 },
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(HttpResponse::Ok().content_type("application/json").json(
        Response { message: "Successfully Followed".to_string() }
    ))
}
