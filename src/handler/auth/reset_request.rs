use uuid::Uuid;
use chrono::Utc;
use rand::Rng;
use serde_json::json;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Account::{AccountCore, PasswordResetRequest};

const RESET_REQUEST_MINUTES: i64 = 15;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    email_address: String,
}

pub async fn task(
    state: web::Data<AppState>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    if string::is_blank(&form_data.email_address) {
        return Ok(Response::bad_request("Email address is required"));
    }

    let email_address = form_data.email_address.trim().to_lowercase();

    let db = &state.db;
    let collection = db.collection::<AccountCore>("account_core");

    let result = collection.find_one(
        doc!{"email_address": &email_address}
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("No account with this email address"));
    }

    let account_core = option.unwrap();

    let secret_key = Uuid::new_v4().to_string();
    let validation_code = rand::thread_rng()
        .gen_range(100000..1000000)
        .to_string();
    let now = Utc::now().timestamp_millis();

    let reset_request = PasswordResetRequest {
        uuid: Uuid::new_v4().to_string(),
        user_id: account_core.uuid.clone(),
        secret_key: secret_key.clone(),
        validation_code: validation_code.clone(),
        code_validated: false,
        expires_at: now + RESET_REQUEST_MINUTES * 60 * 1000,
    };

    let collection = db.collection::<PasswordResetRequest>(
        "password_reset_request"
    );
    let result = collection.insert_one(reset_request).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    //TODO: deliver the code by email once a mail provider is wired up
    log::info!(
        "password reset code for {}: {}",
        account_core.username,
        validation_code,
    );

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "secret_key": secret_key
        }))
    )
}
