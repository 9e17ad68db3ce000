use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Post::{PostCore, PostStatus};
use crate::model::Comment::{CommentCore, CommentStatus};
use crate::Model::report::{self, Report, ReportStatus, ReportedKind};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    pub reason: String,
    pub post_id: Option<String>,
    pub comment_id: Option<String>,
}

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

    if string::is_blank(&form_data.reason) {
        return Ok(Response::bad_request("Report reason required"));
    }

    let kind = match report::validate_target(
        &form_data.post_id,
        &form_data.comment_id,
    ) {
        Ok(kind) => kind,
        Err(error) => return Ok(Response::bad_request(&error)),
    };

    let db = &state.db;

    //the report carries the owning fandom of whatever it points at
    let fandom_id = match kind {
        ReportedKind::Post => {
            let collection = db.collection::<PostCore>("post_core");
            let result = collection.find_one(doc!{
                "uuid": form_data.post_id.clone().unwrap(),
                "status": PostStatus::Active.to_string(),
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            let option = result.unwrap();
            if let None = option {
                return Ok(Response::not_found("post not found"));
            }

            option.unwrap().fandom_id
        },
        ReportedKind::Comment => {
            let collection = db.collection::<CommentCore>("comment_core");
            let result = collection.find_one(doc!{
                "uuid": form_data.comment_id.clone().unwrap(),
                "status": CommentStatus::Active.to_string(),
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            let option = result.unwrap();
            if let None = option {
                return Ok(Response::not_found("comment not found"));
            }

            let comment = option.unwrap();

            let collection = db.collection::<PostCore>("post_core");
            let result = collection.find_one(doc!{
                "uuid": &comment.post_id,
            }).await;

            if let Err(error) = result {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }

            let option = result.unwrap();
            if let None = option {
                return Ok(Response::not_found("post not found"));
            }

            option.unwrap().fandom_id
        },
    };

    // one report per reporter per content
    let collection = db.collection::<Report>("report");

    let mut duplicate_filter = doc!{ "reporter": &user_id };
    match kind {
        ReportedKind::Post => {
            duplicate_filter.insert(
                "post_id",
                form_data.post_id.clone().unwrap()
            );
        },
        ReportedKind::Comment => {
            duplicate_filter.insert(
                "comment_id",
                form_data.comment_id.clone().unwrap()
            );
        },
    }

    let result = collection.count_documents(duplicate_filter).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() > 0 {
        return Ok(Response::conflict(
            "You have already reported this content"
        ));
    }

    let report_id = Uuid::new_v4().to_string();

    let report = Report {
        uuid: report_id.clone(),
        reporter: user_id,
        reason: form_data.reason.trim().to_string(),
        post_id: form_data.post_id.clone(),
        comment_id: form_data.comment_id.clone(),
        fandom_id,
        status: ReportStatus::Pending,
        created_at: Utc::now().timestamp_millis(),
        reviewed_at: None,
        reviewed_by: None,
    };

    let result = collection.insert_one(report).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "uuid": &report_id
        }))
    )
}
