use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use crate::BuiltIns::sequence::StepSequence;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::{AccountCore, AccountRole};
use crate::Model::Fandom::{
    FandomCore,
    FandomStat,
    FandomMember,
    FandomModerator,
    FandomRequest,
    FandomRequestStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ReviewAction { Approve, Reject }

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    action: ReviewAction,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    request_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::Role(AccountRole::Administrator)
    )?;

    let user_id = user.user_id;
    let request_id = request_id.into_inner();

    let db = &state.db;

    //finding the request
    let collection = db.collection::<FandomRequest>("fandom_request");
    let result = collection.find_one(doc!{ "uuid": &request_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("fandom request not found"));
    }

    let fandom_request = option.unwrap();

    if fandom_request.status != FandomRequestStatus::Pending {
        return Ok(Response::conflict(
            "This request has already been reviewed"
        ));
    }

    let now = Utc::now().timestamp_millis();

    if form_data.action == ReviewAction::Reject {
        let result = collection.update_one(
            doc!{ "uuid": &request_id },
            doc!{"$set": {
                "status": FandomRequestStatus::Rejected.to_string(),
                "reviewed_at": now,
                "reviewed_by": &user_id,
            }},
        ).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        return Ok(HttpResponse::Ok().content_type("application/json").json(
            Response { message: "Request rejected".to_string() }
        ));
    }

    //approval provisions the fandom in four ordered writes with no
    //rollback; a failure keeps the earlier writes and is reported per step
    let fandom_id = Uuid::new_v4().to_string();
    let mut sequence = StepSequence::new("approve-fandom-request");

    let result = sequence.run("mark-request-approved", async {
        let result = collection.update_one(
            doc!{
                "uuid": &request_id,
                "status": FandomRequestStatus::Pending.to_string(),
            },
            doc!{"$set": {
                "status": FandomRequestStatus::Approved.to_string(),
                "reviewed_at": now,
                "reviewed_by": &user_id,
            }},
        ).await;

        match result {
            Ok(update) if update.matched_count == 0 => {
                Err("request is no longer pending".to_string())
            },
            Ok(_) => Ok(()),
            Err(error) => Err(error.to_string()),
        }
    }).await;

    if let Err(failure) = result {
        log::error!("{}", failure);
        return Ok(Response::sequence_failure(&failure));
    }

    let result = sequence.run("create-fandom", async {
        let collection = db.collection::<FandomCore>("fandom_core");
        let fandom_core = FandomCore {
            uuid: fandom_id.clone(),
            name: fandom_request.name.clone(),
            tag_name: fandom_request.tag_name.clone(),
            description: fandom_request.description.clone(),
            created_by: fandom_request.requested_by.clone(),
            created_at: now,
            modified_at: now,
        };

        if let Err(error) = collection.insert_one(fandom_core).await {
            return Err(error.to_string());
        }

        let collection = db.collection::<FandomStat>("fandom_stat");
        let fandom_stat = FandomStat {
            uuid: fandom_id.clone(),
            member_count: 0,
            post_count: 0,
            modified_at: now,
        };

        if let Err(error) = collection.insert_one(fandom_stat).await {
            return Err(error.to_string());
        }

        Ok(())
    }).await;

    if let Err(failure) = result {
        log::error!("{}", failure);
        return Ok(Response::sequence_failure(&failure));
    }

    let result = sequence.run("assign-moderator", async {
        let collection = db.collection::<FandomModerator>("fandom_moderator");
        let fandom_moderator = FandomModerator {
            fandom_id: fandom_id.clone(),
            user_id: fandom_request.requested_by.clone(),
            assigned_by: user_id.clone(),
            assigned_at: now,
        };

        if let Err(error) = collection.insert_one(fandom_moderator).await {
            return Err(error.to_string());
        }

        //plain accounts gain the Moderator role the first time they are
        //assigned to a fandom
        let collection = db.collection::<AccountCore>("account_core");
        let result = collection.update_one(
            doc!{
                "uuid": &fandom_request.requested_by,
                "role": AccountRole::User.to_string(),
            },
            doc!{"$set": {
                "role": AccountRole::Moderator.to_string(),
            }},
        ).await;

        if let Err(error) = result {
            return Err(error.to_string());
        }

        Ok(())
    }).await;

    if let Err(failure) = result {
        log::error!("{}", failure);
        return Ok(Response::sequence_failure(&failure));
    }

    let result = sequence.run("add-founding-member", async {
        let collection = db.collection::<FandomMember>("fandom_member");
        let fandom_member = FandomMember {
            fandom_id: fandom_id.clone(),
            user_id: fandom_request.requested_by.clone(),
            joined_at: now,
        };

        if let Err(error) = collection.insert_one(fandom_member).await {
            return Err(error.to_string());
        }

        let collection = db.collection::<FandomStat>("fandom_stat");
        let result = collection.update_one(
            doc!{ "uuid": &fandom_id },
            doc!{
                "$inc":{ "member_count": 1 },
                "$set":{ "modified_at": now }
            },
        ).await;

        if let Err(error) = result {
            return Err(error.to_string());
        }

        Ok(())
    }).await;

    if let Err(failure) = result {
        log::error!("{}", failure);
        return Ok(Response::sequence_failure(&failure));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "fandom_id": &fandom_id,
            "completed_steps": sequence.completed(),
        }))
    )
}
