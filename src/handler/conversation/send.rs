use uuid::Uuid;
use chrono::Utc;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Conversation::{ConversationCore, ConversationParticipant, MessageCore};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    text: String,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    conversation_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;
    let conversation_id = conversation_id.into_inner();

    if string::is_blank(&form_data.text) {
        return Ok(Response::bad_request("Message text required"));
    }

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

    let message_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();

    let message = MessageCore {
        uuid: message_id.clone(),
        conversation_id: conversation_id.clone(),
        owner: user_id,
        text: form_data.text.trim().to_string(),
        created_at: now,
    };

    let collection = db.collection::<MessageCore>("message_core");
    let result = collection.insert_one(message.clone()).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let collection = db.collection::<ConversationCore>("conversation_core");
    let result = collection.update_one(
        doc!{ "uuid": &conversation_id },
        doc!{"$set": {
            "last_message_at": now,
            "last_message_id": &message_id,
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(message)
    )
}
