use futures::StreamExt;
use chrono::Utc;
use serde_json::json;
use mongodb::{ Database, bson::doc };
use crate::BuiltIns::state::AppState;
use crate::BuiltIns::sequence::StepSequence;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Account::AccountRole;
use crate::model::Fandom::FandomModerator;
use crate::model::Post::{PostCore, PostStatus};
use crate::model::Comment::{CommentCore, CommentStatus};
use crate::Model::report::{Report, ReportAction, ReportStatus, ReportedKind};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    action: ReportAction,
}

pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    report_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyOf(vec![
            AccountRole::Administrator,
            AccountRole::Moderator,
        ])
    )?;

    let user_id = user.user_id;
    let report_id = report_id.into_inner();

    let db = &state.db;

    //finding the report
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
        let moderated = match moderated_fandoms(db, &user_id).await {
            Ok(moderated) => moderated,
            Err(error) => return Ok(error),
        };

        if !moderated.contains(&report.fandom_id) {
            return Ok(Response::forbidden("You do not moderate this fandom"));
        }
    }

    //a settled report never goes back to pending
    if report.status != ReportStatus::Pending {
        return Ok(Response::conflict(
            "This report has already been reviewed"
        ));
    }

    let now = Utc::now().timestamp_millis();

    if form_data.action == ReportAction::Reject {
        //reject touches only the report, the content stays up
        let result = collection.update_one(
            doc!{ "uuid": &report_id },
            doc!{"$set": {
                "status": ReportStatus::Rejected.to_string(),
                "reviewed_at": now,
                "reviewed_by": &user_id,
            }},
        ).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        if result.unwrap().matched_count == 0 {
            return Ok(Response::not_found("report not found"));
        }

        return Ok(HttpResponse::Ok().content_type("application/json").json(
            Response { message: "Report rejected".to_string() }
        ));
    }

    //accept is two independent writes with no rollback: if the removal
    //fails the report stays accepted and the failure names the step
    let mut sequence = StepSequence::new("accept-report");

    let result = sequence.run("mark-report-accepted", async {
        let result = collection.update_one(
            doc!{
                "uuid": &report_id,
                "status": ReportStatus::Pending.to_string(),
            },
            doc!{"$set": {
                "status": ReportStatus::Accepted.to_string(),
                "reviewed_at": now,
                "reviewed_by": &user_id,
            }},
        ).await;

        match result {
            Ok(update) if update.matched_count == 0 => {
                Err("report is no longer pending".to_string())
            },
            Ok(_) => Ok(()),
            Err(error) => Err(error.to_string()),
        }
    }).await;

    if let Err(failure) = result {
        log::error!("{}", failure);
        return Ok(Response::sequence_failure(&failure));
    }

    let result = sequence.run("remove-reported-content", async {
        //content already gone by other means is a no-op, not a failure
        let result = match report.kind() {
            ReportedKind::Post => {
                let collection = db.collection::<PostCore>("post_core");
                collection.update_one(
                    doc!{
                        "uuid": report.post_id.clone().unwrap(),
                        "status": PostStatus::Active.to_string(),
                    },
                    doc!{"$set": {
                        "status": PostStatus::Removed.to_string(),
                        "removed_by": &user_id,
                        "deleted_at": now,
                        "modified_at": now,
                    }},
                ).await
            },
            ReportedKind::Comment => {
                let collection = db.collection::<CommentCore>("comment_core");
                collection.update_one(
                    doc!{
                        "uuid": report.comment_id.clone().unwrap(),
                        "status": CommentStatus::Active.to_string(),
                    },
                    doc!{"$set": {
                        "status": CommentStatus::Removed.to_string(),
                        "removed_by": &user_id,
                        "deleted_at": now,
                        "modified_at": now,
                    }},
                ).await
            },
        };

        match result {
            Ok(_) => Ok(()),
            Err(error) => Err(error.to_string()),
        }
    }).await;

    if let Err(failure) = result {
        log::error!("{}", failure);
        return Ok(Response::sequence_failure(&failure));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "message": "Report accepted",
            "completed_steps": sequence.completed(),
        }))
    )
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
