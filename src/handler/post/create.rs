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
use crate::model::Post::{PostCore, PostStat, PostStatus};
use crate::model::Fandom::{FandomMember, FandomStat};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    fandom_id: String,
    title: String,
    body: Option<String>,
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

    if let Err(res) = check_empty_fields(&form_data) {
        return Ok(Response::bad_request(&res));
    }

    let db = &state.db;

    //only members can post in a fandom
    let collection = db.collection::<FandomMember>("fandom_member");
    let result = collection.count_documents(doc!{
        "fandom_id": &form_data.fandom_id,
        "user_id": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() == 0 {
        return Ok(Response::forbidden(
            "Only members can post in this fandom"
        ));
    }

    let post_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();

    // insert post core
    let collection = db.collection::<PostCore>("post_core");
    let post_core = PostCore {
        uuid: post_id.clone(),
        owner: user_id.clone(),
        fandom_id: form_data.fandom_id.clone(),
        title: form_data.title.trim().to_string(),
        body: form_data.body.clone(),
        status: PostStatus::Active,
        created_at: now,
        modified_at: now,
        deleted_at: None,
        removed_by: None,
    };

    let result = collection.insert_one(post_core).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // insert post stat
    let collection = db.collection::<PostStat>("post_stat");
    let post_stat = PostStat {
        uuid: post_id.clone(),
        upvote_count: 0,
        downvote_count: 0,
        comment_count: 0,
        modified_at: now,
    };

    let result = collection.insert_one(post_stat).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // Update fandom post count
    let collection = db.collection::<FandomStat>("fandom_stat");
    let result = collection.update_one(
        doc!{ "uuid": &form_data.fandom_id },
        doc!{
            "$inc":{ "post_count": 1 },
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().modified_count == 0 {
        return Ok(Response::not_found("fandom not found"));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "uuid": &post_id
        }))
    )
}

fn check_empty_fields(data: &ReqBody) -> Result<(), String> {
    if string::is_blank(&data.fandom_id) {
        Err("Fandom id required".to_string())
    }
    else if string::is_blank(&data.title) {
        Err("Post title required".to_string())
    }
    else {
        Ok(())
    }
}
