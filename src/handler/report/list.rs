use futures::StreamExt;
use serde_json::json;
use mongodb::{ Database, bson::doc };
use crate::utils::mongo;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::utils::pagination::Pagination;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::{AccountCore, AccountRole};
use crate::model::Fandom::{FandomCore, FandomModerator};
use crate::model::Post::{PostCore, PostStatus};
use crate::model::Comment::{CommentCore, CommentStatus};
use crate::Model::report::{Report, ReportStatus, ReportedKind};

const PAGE_SIZE: u32 = 5;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    status: Option<ReportStatus>,
    fandom_id: Option<String>,
    page: Option<u32>,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    req_query: web::Query<ReqQuery>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyOf(vec![
            AccountRole::Administrator,
            AccountRole::Moderator,
        ])
    )?;

    let db = &state.db;

    let status = req_query.status.clone().unwrap_or(ReportStatus::Pending);
    let mut filter = doc!{ "status": status.to_string() };

    //admins see everything, moderators only their own fandoms
    if user.role == AccountRole::Administrator {
        if let Some(fandom_id) = req_query.fandom_id.clone() {
            filter.insert("fandom_id", fandom_id);
        }
    } else {
        let moderated = match moderated_fandoms(db, &user.user_id).await {
            Ok(moderated) => moderated,
            Err(error) => return Ok(error),
        };

        match req_query.fandom_id.clone() {
            Some(fandom_id) => {
                if !moderated.contains(&fandom_id) {
                    return Ok(Response::forbidden(
                        "You do not moderate this fandom"
                    ));
                }

                filter.insert("fandom_id", fandom_id);
            },
            None => {
                filter.insert("fandom_id", doc!{ "$in": moderated });
            },
        }
    }

    let collection = db.collection::<Report>("report");

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

    let mut reports = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let report = result.unwrap();

        // Getting the reporter handle
        let collection = db.collection::<AccountCore>("account_core");
        let result = collection.find_one(
            doc!{ "uuid": &report.reporter }
        ).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("reporter not found"));
        }

        let reporter = option.unwrap();

        // Getting the fandom name
        let collection = db.collection::<FandomCore>("fandom_core");
        let result = collection.find_one(
            doc!{ "uuid": &report.fandom_id }
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

        //content already removed by other means still renders, the
        //content block is just null
        let content = match resolve_content(db, &report).await {
            Ok(content) => content,
            Err(error) => return Ok(error),
        };

        reports.push(json!({
            "uuid": &report.uuid,
            "reason": &report.reason,
            "kind": report.kind(),
            "status": &report.status,
            "created_at": &report.created_at,
            "reviewed_at": &report.reviewed_at,
            "reporter": json!({
                "uuid": &reporter.uuid,
                "username": &reporter.username,
            }),
            "fandom": json!({
                "uuid": &fandom_core.uuid,
                "name": &fandom_core.name,
            }),
            "content": content,
        }));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "reports": reports,
            "pagination": json!({
                "page": pagination.page,
                "per_page": pagination.per_page,
                "total": pagination.total,
                "total_pages": pagination.total_pages,
                "next_page": pagination.next(),
                "prev_page": pagination.prev(),
            }),
        }))
    )
}

async fn resolve_content(
    db: &Database,
    report: &Report,
) -> Result<Option<serde_json::Value>, HttpResponse> {
    match report.kind() {
        ReportedKind::Post => {
            let collection = db.collection::<PostCore>("post_core");
            let result = collection.find_one(doc!{
                "uuid": report.post_id.clone().unwrap(),
                "status": PostStatus::Active.to_string(),
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Err(Response::internal_server_error(&error.to_string()));
            }

            let post = match result.unwrap() {
                Some(post) => post,
                None => return Ok(None),
            };

            let author = match content_author(db, &post.owner).await {
                Ok(Some(author)) => author,
                Ok(None) => return Ok(None),
                Err(error) => return Err(error),
            };

            Ok(Some(json!({
                "uuid": &post.uuid,
                "title": &post.title,
                "body": &post.body,
                "created_at": &post.created_at,
                "author": author,
            })))
        },
        ReportedKind::Comment => {
            let collection = db.collection::<CommentCore>("comment_core");
            let result = collection.find_one(doc!{
                "uuid": report.comment_id.clone().unwrap(),
                "status": CommentStatus::Active.to_string(),
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Err(Response::internal_server_error(&error.to_string()));
            }

            let comment = match result.unwrap() {
                Some(comment) => comment,
                None => return Ok(None),
            };

            let author = match content_author(db, &comment.owner).await {
                Ok(Some(author)) => author,
                Ok(None) => return Ok(None),
                Err(error) => return Err(error),
            };

            Ok(Some(json!({
                "uuid": &comment.uuid,
                "post_id": &comment.post_id,
                "text": &comment.text,
                "created_at": &comment.created_at,
                "author": author,
            })))
        },
    }
}

async fn content_author(
    db: &Database,
    owner: &str,
) -> Result<Option<serde_json::Value>, HttpResponse> {
    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.find_one(doc!{ "uuid": owner }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    Ok(result.unwrap().map(|author| json!({
        "uuid": &author.uuid,
        "username": &author.username,
    })))
}

async fn moderated_fandoms(
    db: &Database,
    user_id: &str,
) -> Result<Vec<String>, HttpResponse> {
    let collection = db.collection::<FandomModerator>("fandom_moderator");
    let result = collection.find(doc!{ "user_id": user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut fandom_ids = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Err(Response::internal_server_error(&error.to_string()));
        }

        fandom_ids.push(result.unwrap().fandom_id);
    }

    Ok(fandom_ids)
}
