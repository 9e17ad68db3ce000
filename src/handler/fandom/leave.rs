use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Fandom::{FandomMember, FandomStat};

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

    let collection = db.collection::<FandomMember>("fandom_member");
    let result = collection.delete_one(doc!{
        "fandom_id": &fandom_id,
        "user_id": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().deleted_count == 0 {
        return Ok(Response::not_found("You are not a member of this fandom"));
    }

    let now = Utc::now().timestamp_millis();

    let collection = db.collection::<FandomStat>("fandom_stat");
    let result = collection.update_one(
        doc!{ "uuid": &fandom_id },
        doc!{
            "$inc":{ "member_count": -1 },
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(HttpResponse::Ok().content_type("application/json").json(
        Response { message: "Successfully Left".to_string() }
    ))
}
