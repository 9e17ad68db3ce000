use futures::StreamExt;
use serde_json::json;
use mongodb::{ Database, bson::doc };
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::{AccountCore, AccountRole};
use crate::model::Fandom::FandomModerator;
use crate::model::Post::PostCore;
use crate::model::Comment::CommentCore;
use crate::Model::report::{self, Report, ReportAction, ReportedKind};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    action: ReportAction,
}

//builds the confirmation step for a review action; nothing is written
//here, the review endpoint acts only after the reviewer confirms
pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    report_id: web::Path<String>,
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

    let report_id = report_id.into_inner();

    let db = &state.db;

    let collection = db.collection::<Report>("report");
    let result = collection.find_one(doc!{ "uuid": &report_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("report not found"));
    }

    let report = option.unwrap();

    if user.role != AccountRole::Administrator {
        let moderated = match moderated_fandoms(db, &user.user_id).await {
            Ok(moderated) => moderated,
            Err(error) => return Ok(error),
        };

        if !moderated.contains(&report.fandom_id) {
            return Ok(Response::forbidden("You do not moderate this fandom"));
        }
    }

    let author_handle = match author_handle(db, &report).await {
        Ok(author_handle) => author_handle,
        Err(error) => return Ok(error),
    };

    let prompt = report::confirmation_prompt(
        &req_query.action,
        &report.kind(),
        &author_handle,
    );

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "report_id": &report.uuid,
            "action": &req_query.action,
            "prompt": prompt,
        }))
    )
}

//the handle of whoever authored the reported content; content that is
//already gone falls back to a placeholder instead of failing
async fn author_handle(
    db: &Database,
    report: &Report,
) -> Result<String, HttpResponse> {
    let owner = match report.kind() {
        ReportedKind::Post => {
            let collection = db.collection::<PostCore>("post_core");
            let result = collection.find_one(doc!{
                "uuid": report.post_id.clone().unwrap(),
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Err(Response::internal_server_error(&error.to_string()));
            }

            result.unwrap().map(|post| post.owner)
        },
        ReportedKind::Comment => {
            let collection = db.collection::<CommentCore>("comment_core");
            let result = collection.find_one(doc!{
                "uuid": report.comment_id.clone().unwrap(),
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Err(Response::internal_server_error(&error.to_string()));
            }

            result.unwrap().map(|comment| comment.owner)
        },
    };

    let owner = match owner {
        Some(owner) => owner,
        None => return Ok("unknown".to_string()),
    };

    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.find_one(doc!{ "uuid": &owner }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Err(Response::internal_server_error(&error.to_string()));
    }

    Ok(match result.unwrap() {
        Some(author) => author.username,
        None => "unknown".to_string(),
    })
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
