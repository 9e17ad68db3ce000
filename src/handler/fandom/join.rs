use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Fandom::{FandomCore, FandomMember, FandomStat};

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

    //finding the fandom
    let collection = db.collection::<FandomCore>("fandom_core");
    let result = collection.count_documents(doc!{ "uuid": &fandom_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() == 0 {
        return Ok(Response::not_found("fandom not found"));
    }

    let collection = db.collection::<FandomMember>("fandom_member");
    let result = collection.count_documents(doc!{
        "fandom_id": &fandom_id,
        "user_id": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() > 0 {
        return Ok(Response::conflict("Already a member of this fandom"));
    }

    let now = Utc::now().timestamp_millis();

    let result = collection.insert_one(FandomMember {
        fandom_id: fandom_id.clone(),
        user_id: user_id.clone(),
        joined_at: now,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let collection = db.collection::<FandomStat>("fandom_stat");
    let result = collection.update_one(
        doc!{ "uuid": &fandom_id },
        doc!{
            "$inc":{ "member_count": 1 },
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(HttpResponse::Ok().content_type("application/json").json(
        Response { message: "Successfully Joined".to_string() }
    ))
}
