use futures::StreamExt;
use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::{
    Conversation,
    Account,
};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    limit: Option<u32>,
    offset: Option<u32>,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    req_query: web::Query<ReqQuery>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let user_id = user.user_id;

    let db = &state.db;
    let collection = db.collection::<Conversation::ConversationParticipant>(
        "conversation_participant"
    );

    let result = collection.find(doc!{
        "user_id": &user_id
    }).await;

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

    let collection = db.collection::<Conversation::ConversationCore>(
        "conversation_core"
    );

    let limit = req_query.limit.unwrap_or(10) as i64;
    let offset = req_query.offset.unwrap_or(0) as i64;

    let result = collection.find(doc!{
        "uuid": {
            "$in": conversation_ids
        }
    }).sort(doc! {
        "last_message_at": -1,
        "created_at": -1
    })
    .limit(limit)
    .skip(offset as u64).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut response = Vec::new();

    while let Some(conversation_core) = cursor.next().await {
        if let Err(error) = conversation_core {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let conversation_core = conversation_core.unwrap();

        //the other side of the conversation
        let collection = db.collection::<Conversation::ConversationParticipant>(
            "conversation_participant"
        );

        let result = collection.find_one(doc!{
            "conversation_id": &conversation_core.uuid,
            "user_id": {
                "$ne": &user_id
            }
        }).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found(
                "Conversation participant not found"
            ));
        }

        let peer = option.unwrap();

        let collection = db.collection::<Account::AccountCore>("account_core");
        let result = collection.find_one(doc!{
            "uuid": &peer.user_id
        }).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("account not found"));
        }

        let peer_core = option.unwrap();

        let collection = db.collection::<Account::AccountProfile>(
            "account_profile"
        );
        let result = collection.find_one(doc!{
            "uuid": &peer.user_id
        }).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("Account profile not found"));
        }

        let peer_profile = option.unwrap();

        // Getting the last message
        let last_message = match conversation_core.last_message_id.clone() {
            Some(message_id) => {
                let collection = db.collection::<Conversation::MessageCore>(
                    "message_core"
                );
                let result = collection.find_one(doc!{
                    "uuid": &message_id
                }).await;

                if let Err(error) = result {
                    log::error!("{:?}", error);
                    return Ok(Response::internal_server_error(
                        &error.to_string()
                    ));
                }

                result.unwrap()
            },
            None => None,
        };

        response.push(json!({
            "core": conversation_core,
            "peer": json!({
                "user_id": &peer.user_id,
                "username": &peer_core.username,
                "display_name": &peer_profile.display_name,
            }),
            "last_message": last_message,
        }));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(response)
    )
}
