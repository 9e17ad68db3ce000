use chrono::Utc;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Account::{AccountCore, PasswordResetRequest};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    secret_key: String,
    validation_code: String,
    new_password: String,
}

pub async fn task(
    state: web::Data<AppState>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    if string::is_blank(&form_data.secret_key)
        || string::is_blank(&form_data.validation_code) {
        return Ok(Response::bad_request("Reset code is required"));
    }

    if form_data.new_password.len() < 8 {
        return Ok(Response::bad_request(
            "Password must be at least 8 characters"
        ));
    }

    let db = &state.db;
    let collection = db.collection::<PasswordResetRequest>(
        "password_reset_request"
    );

    let result = collection.find_one(
        doc!{"secret_key": &form_data.secret_key}
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("No reset request found"));
    }

    let reset_request = option.unwrap();
    let now = Utc::now().timestamp_millis();

    if reset_request.expires_at < now {
        return Ok(Response::bad_request("This reset code has expired"));
    }

    if reset_request.validation_code != form_data.validation_code {
        return Ok(Response::bad_request("Invalid validation code"));
    }

    let password = match bcrypt::hash(
        &form_data.new_password,
        bcrypt::DEFAULT_COST
    ) {
        Ok(password) => password,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        },
    };

    let collection = db.collection::<AccountCore>("account_core");
    let result = collection.update_one(
        doc!{"uuid": &reset_request.user_id},
        doc!{"$set": { "password": password }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().matched_count == 0 {
        return Ok(Response::not_found("account not found"));
    }

    //a used request is gone, the code cannot be replayed
    let collection = db.collection::<PasswordResetRequest>(
        "password_reset_request"
    );
    let result = collection.delete_one(
        doc!{"uuid": &reset_request.uuid}
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
    }

    Ok(HttpResponse::Ok().content_type("application/json").json(
        Response { message: "Password updated".to_string() }
    ))
}
