use chrono::Utc;
use mongodb::bson::{ doc, Document };
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::VoteDirection;
use crate::model::Comment::{CommentCore, CommentStat, CommentStatus, CommentVote};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    direction: VoteDirection,
}

fn counter_field(direction: &VoteDirection) -> &'static str {
    match direction {
        VoteDirection::Up => "upvote_count",
        VoteDirection::Down => "downvote_count",
    }
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    comment_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let comment_id = comment_id.into_inner();

    let db = &state.db;

    //finding the comment
    let collection = db.collection::<CommentCore>("comment_core");
    let result = collection.count_documents(doc!{
        "uuid": &comment_id,
        "status": CommentStatus::Active.to_string(),
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() == 0 {
        return Ok(Response::not_found("comment not found"));
    }

    let now = Utc::now().timestamp_millis();
    let direction = form_data.direction.clone();

    let collection = db.collection::<CommentVote>("comment_vote");
    let result = collection.find_one(doc!{
        "comment_id": &comment_id,
        "voted_by": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let existing = result.unwrap();

    let stat_update = match existing {
        None => {
            let result = collection.insert_one(CommentVote {
                comment_id: comment_id.clone(),
                voted_by: user_id.clone(),
                direction: direction.clone(),
                voted_at: now,
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            let mut update = Document::new();
            update.insert(counter_field(&direction), 1);
            update
        },
        Some(vote) if vote.direction == direction => {
            let result = collection.delete_one(doc!{
                "comment_id": &comment_id,
                "voted_by": &user_id,
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            let mut update = Document::new();
            update.insert(counter_field(&direction), -1);
            update
        },
        Some(vote) => {
            let result = collection.update_one(
                doc!{
                    "comment_id": &comment_id,
                    "voted_by": &user_id,
                },
                doc!{"$set": {
                    "direction": direction.to_string(),
                    "voted_at": now,
                }},
            ).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            let mut update = Document::new();
            update.insert(counter_field(&direction), 1);
            update.insert(counter_field(&vote.direction), -1);
            update
        },
    };

    let collection = db.collection::<CommentStat>("comment_stat");
    let result = collection.update_one(
        doc!{ "uuid": &comment_id },
        doc!{
            "$inc": stat_update,
            "$set":{ "modified_at": now }
        },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let result = collection.find_one(doc!{ "uuid": &comment_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("comment stat not found"));
    }

    let comment_stat = option.unwrap();

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(serde_json::json!({
            "upvote_count": &comment_stat.upvote_count,
            "downvote_count": &comment_stat.downvote_count,
        }))
    )
}
