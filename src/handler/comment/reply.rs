use uuid::Uuid;
use chrono::Utc;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::AccountCore;
use crate::model::Post::PostStat;
use crate::model::Comment::{CommentCore, CommentStat, CommentStatus};
use crate::Model::Thread::{CommentNode, ThreadComment};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    text: String,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    parent_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let parent_id = parent_id.into_inner();

    if string::is_blank(&form_data.text) {
        return Ok(Response::bad_request("Reply text required"));
    }

    let db = &state.db;

    //the parent may itself be a reply; depth is not restricted here
    let collection = db.collection::<CommentCore>("comment_core");
    let result = collection.find_one(doc!{
        "uuid": &parent_id,
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

    let parent = option.unwrap();

    let reply_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();
    let text = form_data.text.trim().to_string();

    // insert reply core
    let comment_core = CommentCore {
        uuid: reply_id.clone(),
        owner: user_id.clone(),
        post_id: parent.post_id.clone(),
        parent_comment_id: Some(parent_id.clone()),
        text: text.clone(),
        status: CommentStatus::Active,
        created_at: now,
        modified_at: now,
        deleted_at: None,
        removed_by: None,
    };

    let result = collection.insert_one(comment_core).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // insert reply stat
    let collection = db.collection::<CommentStat>("comment_stat");
    let comment_stat = CommentStat {
        uuid: reply_id.clone(),
        upvote_count: 0,
        downvote_count: 0,
        reply_count: 0,
        modified_at: now,
    };

    let result = collection.insert_one(comment_stat).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // Update parent reply count
    let result = collection.update_one(
        doc!{ "uuid": &parent_id },
        doc!{
            "$inc":{ "reply_count": 1 },
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // Update post comment count
    let collection = db.collection::<PostStat>("post_stat");
    let result = collection.update_one(
        doc!{ "uuid": &parent.post_id },
        doc!{
            "$inc":{ "comment_count": 1 },
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    //Finding the author handle for the returned node
    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.find_one(doc!{ "uuid": &user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("account not found"));
    }

    let author = option.unwrap();

    //the caller appends this node at the end of the parent's reply
    //list, keeping the thread in chronological order
    let node = CommentNode::new(ThreadComment {
        uuid: reply_id,
        owner: user_id,
        owner_username: author.username,
        post_id: parent.post_id,
        parent_comment_id: Some(parent_id),
        text,
        upvote_count: 0,
        downvote_count: 0,
        reply_count: 0,
        created_at: now,
        modified_at: now,
    });

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(node)
    )
}
