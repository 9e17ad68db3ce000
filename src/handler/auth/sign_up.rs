use uuid::Uuid;
use chrono::Utc;
use serde_json::json;
use mongodb::bson::doc;
use crate::utils::string;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::model::Account::{AccountCore, AccountProfile, AccountSocial, AccountRole};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    email_address: String,
    username: String,
    password: String,
    display_name: String,
}

pub async fn task(
    state: web::Data<AppState>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    if let Err(res) = check_empty_fields(&form_data) {
        return Ok(Response::bad_request(&res));
    }

    let email_address = form_data.email_address.trim().to_lowercase();
    let username = form_data.username.trim().to_lowercase();

    if !email_address.contains('@') {
        return Ok(Response::bad_request("A valid email address is required"));
    }

    if form_data.password.len() < 8 {
        return Ok(Response::bad_request(
            "Password must be at least 8 characters"
        ));
    }

    let db = &state.db;
    let collection = db.collection::<AccountCore>("account_core");

    // reject taken email or username
    let result = collection.count_documents(doc!{
        "$or": [
            {"email_address": &email_address},
            {"username": &username},
        ]
    }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap() > 0 {
        return Ok(Response::conflict("Email or username already in use"));
    }

    let password = match bcrypt::hash(&form_data.password, bcrypt::DEFAULT_COST) {
        Ok(password) => password,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        },
    };

    let user_id = Uuid::new_v4().to_string();
    let now = Utc::now().timestamp_millis();

    let account_core = AccountCore {
        uuid: user_id.clone(),
        email_address,
        username,
        password,
        role: AccountRole::User,
        created_at: now,
        suspended_at: None,
        suspended_by: None,
    };

    let result = collection.insert_one(account_core).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // insert profile
    let collection = db.collection::<AccountProfile>("account_profile");
    let account_profile = AccountProfile {
        uuid: user_id.clone(),
        display_name: form_data.display_name.trim().to_string(),
        biography: None,
        profile_verified: false,
        modified_at: now,
    };

    let result = collection.insert_one(account_profile).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    // insert social counters
    let collection = db.collection::<AccountSocial>("account_social");
    let account_social = AccountSocial {
        uuid: user_id.clone(),
        follower_count: 0,
        following_count: 0,
        modified_at: now,
    };

    let result = collection.insert_one(account_social).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "uuid": &user_id
        }))
    )
}

fn check_empty_fields(data: &ReqBody) -> Result<(), String> {
    if string::is_blank(&data.email_address) {
        Err("Email address required".to_string())
    }
    else if string::is_blank(&data.username) {
        Err("Username required".to_string())
    }
    else if string::is_blank(&data.password) {
        Err("Password required".to_string())
    }
    else if string::is_blank(&data.display_name) {
        Err("Display name required".to_string())
    }
    else {
        Ok(())
    }
}
