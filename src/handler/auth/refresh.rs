use chrono::Utc;
use serde_json::json;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse};
use crate::BuiltIns::{jwt, state::AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReqBody {
    refresh_token: String,
}

pub async fn task(
    state: web::Data<AppState>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    //identity and role come from the verified token, never from the body
    let claims = match jwt::refresh_token::verify(
        &state.jwt,
        &form_data.refresh_token,
    ) {
        Ok(claims) => claims,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::unauthorized("Invalid refresh token"));
        },
    };

    let result = jwt::access_token::generate(
        &state.jwt,
        &claims.sub,
        claims.role.clone(),
    );

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let (access_token, time_in_minutes) = result.unwrap();

    let access_token_valid_till = Utc::now().timestamp_millis()
        + (time_in_minutes * 60 * 1000) as i64;

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "access_token": access_token,
            "access_token_valid_till": access_token_valid_till,
        }))
    )
}
