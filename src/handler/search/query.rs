use futures::StreamExt;
use serde_json::json;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Fandom::FandomCore;
use crate::model::Post::{PostCore, PostStatus};
use crate::model::Comment::{CommentCore, CommentStatus};

const RESULT_LIMIT: i64 = 20;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    q: String,
}

//case insensitive match across posts, comments and fandoms, grouped by kind
pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    req_query: web::Query<ReqQuery>
) -> Result<HttpResponse, Error> {
    require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    if string::is_blank(&req_query.q) {
        return Ok(Response::bad_request("Search query required"));
    }

    let q = req_query.q.trim();
    let pattern = doc!{ "$regex": q, "$options": "i" };

    let db = &state.db;

    // posts
    let collection = db.collection::<PostCore>("post_core");
    let result = collection.find(doc!{
        "status": PostStatus::Active.to_string(),
        "$or": [
            { "title": pattern.clone() },
            { "body": pattern.clone() },
        ],
    }).sort(doc! { "created_at": -1 }).limit(RESULT_LIMIT).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut posts = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let post = result.unwrap();
        posts.push(json!({
            "uuid": &post.uuid,
            "title": &post.title,
            "fandom_id": &post.fandom_id,
            "created_at": &post.created_at,
        }));
    }

    // comments
    let collection = db.collection::<CommentCore>("comment_core");
    let result = collection.find(doc!{
        "status": CommentStatus::Active.to_string(),
        "text": pattern.clone(),
    }).sort(doc! { "created_at": -1 }).limit(RESULT_LIMIT).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut comments = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let comment = result.unwrap();
        comments.push(json!({
            "uuid": &comment.uuid,
            "post_id": &comment.post_id,
            "text": &comment.text,
            "created_at": &comment.created_at,
        }));
    }

    // fandoms
    let collection = db.collection::<FandomCore>("fandom_core");
    let result = collection.find(doc!{
        "$or": [
            { "name": pattern.clone() },
            { "tag_name": pattern },
        ],
    }).sort(doc! { "created_at": -1 }).limit(RESULT_LIMIT).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut fandoms = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let fandom = result.unwrap();
        fandoms.push(json!({
            "uuid": &fandom.uuid,
            "name": &fandom.name,
            "tag_name": &fandom.tag_name,
        }));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "posts": posts,
            "comments": comments,
            "fandoms": fandoms,
        }))
    )
}
