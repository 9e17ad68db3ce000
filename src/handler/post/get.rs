use futures::StreamExt;
use serde_json::json;
use mongodb::bson::doc;
use crate::utils::mongo;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::utils::pagination::Pagination;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::AccountCore;
use crate::model::Fandom::FandomCore;
use crate::model::Post::{PostCore, PostStat, PostStatus};

const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    uuid: Option<String>,
    owner: Option<String>,
    fandom_id: Option<String>,
    limit: Option<u32>,
    page: Option<u32>,
}

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

    let db = &state.db;

    //non Active posts are never served
    let mut filter = doc!{ "status": PostStatus::Active.to_string() };

    if let Some(uuid) = req_query.uuid.clone() {
        filter.insert("uuid", uuid);
    }
    if let Some(owner) = req_query.owner.clone() {
        filter.insert("owner", owner);
    }
    if let Some(fandom_id) = req_query.fandom_id.clone() {
        filter.insert("fandom_id", fandom_id);
    }

    let collection = db.collection::<PostCore>("post_core");

    let result = collection.count_documents(filter.clone()).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let total = result.unwrap();
    let pagination = Pagination::new(
        req_query.page.unwrap_or(1),
        req_query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(50),
        total,
    );

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

    let mut posts = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let post_core = result.unwrap();

        let collection = db.collection::<PostStat>("post_stat");
        let result = collection.find_one(
            doc!{"uuid": &post_core.uuid}
        ).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("post stat not found"));
        }

        let post_stat = option.unwrap();

        // Getting the author handle
        let collection = db.collection::<AccountCore>("account_core");
        let result = collection.find_one(
            doc!{"uuid": &post_core.owner}
        ).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("post author not found"));
        }

        let author = option.unwrap();

        // Getting the fandom name
        let collection = db.collection::<FandomCore>("fandom_core");
        let result = collection.find_one(
            doc!{"uuid": &post_core.fandom_id}
        ).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("fandom not found"));
        }

        let fandom_core = option.unwrap();

        posts.push(json!({
            "core": json!({
                "uuid": &post_core.uuid,
                "title": &post_core.title,
                "body": &post_core.body,
                "created_at": &post_core.created_at,
            }),
            "stat": json!({
                "upvote_count": &post_stat.upvote_count,
                "downvote_count": &post_stat.downvote_count,
                "comment_count": &post_stat.comment_count,
            }),
            "author": json!({
                "uuid": &author.uuid,
                "username": &author.username,
            }),
            "fandom": json!({
                "uuid": &fandom_core.uuid,
                "name": &fandom_core.name,
            }),
        }));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "posts": posts,
            "pagination": pagination,
        }))
    )
}
