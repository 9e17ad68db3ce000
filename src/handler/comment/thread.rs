use futures::StreamExt;
use serde_json::json;
use mongodb::{ Database, bson::{ doc, Bson } };
use crate::utils::mongo;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::utils::pagination::Pagination;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::AccountCore;
use crate::model::Post::{PostCore, PostStatus};
use crate::model::Comment::{CommentCore, CommentStat, CommentStatus};
use crate::Model::Thread::{self, ThreadComment};

const PAGE_SIZE: u32 = 20;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    page: Option<u32>,
}

//the thread for one post: top level comments newest first, each with its
//replies oldest first so a conversation reads in the order it happened
pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    post_id: web::Path<String>,
    req_query: web::Query<ReqQuery>
) -> Result<HttpResponse, Error> {
    require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let post_id = post_id.into_inner();

    let db = &state.db;

    //finding the post
    let collection = db.collection::<PostCore>("post_core");
    let result = collection.count_documents(doc!{
        "uuid": &post_id,
        "status": PostStatus::Active.to_string(),
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() == 0 {
        return Ok(Response::not_found("post not found"));
    }

    let filter = doc!{
        "post_id": &post_id,
        "parent_comment_id": Bson::Null,
        "status": CommentStatus::Active.to_string(),
    };

    let collection = db.collection::<CommentCore>("comment_core");
    let result = collection.count_documents(filter.clone()).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let total = result.unwrap();
    let pagination = Pagination::new(
        req_query.page.unwrap_or(1),
        PAGE_SIZE,
        total,
    );

    // top level, newest first
    let result = mongo::find_page(
        &collection,
        filter,
        "created_at",
        false,
        &pagination,
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut top_level = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let comment = match resolve_comment(db, result.unwrap()).await {
            Ok(comment) => comment,
            Err(error) => return Ok(error),
        };

        top_level.push(comment);
    }

    // replies, oldest first
    let result = collection.find(doc!{
        "post_id": &post_id,
        "parent_comment_id": { "$ne": Bson::Null },
        "status": CommentStatus::Active.to_string(),
    }).sort(doc! { "created_at": 1 }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut replies = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let reply = match resolve_comment(db, result.unwrap()).await {
            Ok(reply) => reply,
            Err(error) => return Ok(error),
        };

        replies.push(reply);
    }

    let comments = Thread::assemble(top_level, replies);

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "comments": comments,
            "pagination": pagination,
        }))
    )
}

async fn resolve_comment(
    db: &Database,
    comment_core: CommentCore,
) -> Result<ThreadComment, HttpResponse> {
    let collection = db.collection::<CommentStat>("comment_stat");
    let result = collection.find_one(
        doc!{ "uuid": &comment_core.uuid }
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Err(Response::not_found("comment stat not found"));
    }

    let comment_stat = option.unwrap();

    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.find_one(
        doc!{ "uuid": &comment_core.owner }
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Err(Response::not_found("comment author not found"));
    }

    let author = option.unwrap();

    Ok(ThreadComment {
        uuid: comment_core.uuid,
        owner: comment_core.owner,
        owner_username: author.username,
        post_id: comment_core.post_id,
        parent_comment_id: comment_core.parent_comment_id,
        text: comment_core.text,
        upvote_count: comment_stat.upvote_count,
        downvote_count: comment_stat.downvote_count,
        reply_count: comment_stat.reply_count,
        created_at: comment_core.created_at,
        modified_at: comment_core.modified_at,
    })
}
