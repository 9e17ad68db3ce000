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
use crate::model::Conversation::{ConversationParticipant, MessageCore};

const PAGE_SIZE: u32 = 50;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    page: Option<u32>,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    conversation_id: web::Path<String>,
    req_query: web::Query<ReqQuery>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let conversation_id = conversation_id.into_inner();

    let db = &state.db;

    let collection = db.collection::<ConversationParticipant>(
        "conversation_participant"
    );
    let result = collection.count_documents(doc!{
        "conversation_id": &conversation_id,
        "user_id": &user_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() == 0 {
        return Ok(Response::forbidden(
            "You are not part of this conversation"
        ));
    }

    let filter = doc!{ "conversation_id": &conversation_id };

    let collection = db.collection::<MessageCore>("message_core");
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

    //newest page first, the client renders each page bottom up
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

    let mut messages = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        messages.push(result.unwrap());
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "messages": messages,
            "pagination": pagination,
        }))
    )
}
