use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Fandom::{FandomCore, FandomRequest, FandomRequestStatus};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    name: String,
    tag_name: String,
    description: Option<String>,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;

    if string::is_blank(&form_data.name) {
        return Ok(Response::bad_request("Fandom name required"));
    }

    let tag_name = match string::normalize_tag(&form_data.tag_name) {
        Ok(tag_name) => tag_name,
        Err(error) => return Ok(Response::bad_request(&error)),
    };

    let db = &state.db;

    //the tag must not collide with a live fandom
    let collection = db.collection::<FandomCore>("fandom_core");
    let result = collection.count_documents(doc!{
        "tag_name": &tag_name
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() > 0 {
        return Ok(Response::conflict("A fandom with this tag already exists"));
    }

    //or with a request still waiting for review
    let collection = db.collection::<FandomRequest>("fandom_request");
    let result = collection.count_documents(doc!{
        "tag_name": &tag_name,
        "status": FandomRequestStatus::Pending.to_string(),
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() > 0 {
        return Ok(Response::conflict(
            "A request for this fandom is already pending"
        ));
    }

    let request_id = Uuid::new_v4().to_string();

    let fandom_request = FandomRequest {
        uuid: request_id.clone(),
        name: form_data.name.trim().to_string(),
        tag_name,
        description: form_data.description.clone(),
        requested_by: user_id,
        status: FandomRequestStatus::Pending,
        created_at: Utc::now().timestamp_millis(),
        reviewed_at: None,
        reviewed_by: None,
    };

    let result = collection.insert_one(fandom_request).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "uuid": &request_id
        }))
    )
}
