use uuid::Uuid;
use chrono::Utc;
use futures::StreamExt;
use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::AccountCore;
use crate::model::Conversation::{ConversationCore, ConversationParticipant};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    user_id: String,
}

//direct conversations are find-or-create, one per pair of users
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
    let target_id = form_data.user_id.clone();

    if user_id == target_id {
        return Ok(Response::bad_request(
            "You cannot start a conversation with yourself"
        ));
    }

    let db = &state.db;

    //finding the target account
    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.count_documents(doc!{ "uuid": &target_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() == 0 {
        return Ok(Response::not_found("user not found"));
    }

    let collection = db.collection::<ConversationParticipant>(
        "conversation_participant"
    );

    let result = collection.find(doc!{ "user_id": &user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut conversation_ids: Vec<String> = Vec::new();

    while let Some(participant) = cursor.next().await {
        if let Ok(participant) = participant {
            conversation_ids.push(participant.conversation_id);
        }
    }

    //an existing conversation between the pair is reused
    let result = collection.find_one(doc!{
        "conversation_id": { "$in": conversation_ids },
        "user_id": &target_id,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if let Some(participant) = result.unwrap() {
        return Ok(
            HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({
                "uuid": &participant.conversation_id,
                "existing": true,
            }))
        );
    }

    let conversation_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();

    let core_collection = db.collection::<ConversationCore>(
        "conversation_core"
    );
    let result = core_collection.insert_one(ConversationCore {
        uuid: conversation_id.clone(),
        last_message_at: now,
        last_message_id: None,
        created_at: now,
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    for member in [&user_id, &target_id] {
        let result = collection.insert_one(ConversationParticipant {
            conversation_id: conversation_id.clone(),
            user_id: member.to_string(),
            joined_at: now,
            last_read_message_id: None,
        }).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "uuid": &conversation_id,
            "existing": false,
        }))
    )
}
