use chrono::Utc;
use serde_json::json;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::{jwt, state::AppState};
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Account::AccountCore;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    email_or_username: String,
    password: String,
}

pub async fn task(
    state: web::Data<AppState>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    if string::is_blank(&form_data.email_or_username) {
        return Ok(Response::bad_request("Email/Username is required"));
    }

    if string::is_blank(&form_data.password) {
        return Ok(Response::bad_request("Password is required"));
    }

    let email_or_username = form_data.email_or_username.trim().to_lowercase();

    let db = &state.db;
    let collection = db.collection::<AccountCore>("account_core");

    let result = collection.find_one(
        doc!{"$or": [
            {"email_address": &email_or_username},
            {"username": &email_or_username},
        ]}
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::unauthorized("Invalid credentials"));
    }

    let account_core = option.unwrap();

    if account_core.suspended_at.is_some() {
        return Ok(Response::forbidden("This account is suspended"));
    }

    let result = bcrypt::verify(&form_data.password, &account_core.password);

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if !result.unwrap() {
        return Ok(Response::unauthorized("Invalid credentials"));
    }

    let result = jwt::access_token::generate(
        &state.jwt,
        &account_core.uuid,
        account_core.role.clone(),
    );

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let (access_token, time_in_minutes) = result.unwrap();

    let result = jwt::refresh_token::generate(
        &state.jwt,
        &account_core.uuid,
        account_core.role.clone(),
    );

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let refresh_token = result.unwrap();

    let access_token_valid_till = Utc::now().timestamp_millis()
        + (time_in_minutes * 60 * 1000) as i64;

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "user_id": &account_core.uuid,
            "username": &account_core.username,
            "role": &account_core.role,
            "access_token": access_token,
            "access_token_valid_till": access_token_valid_till,
            "refresh_token": refresh_token,
        }))
    )
}
