use futures::StreamExt;
use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::state::AppState;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::Middleware::Auth::{require_access, AccessRequirement};
use crate::model::Fandom::{FandomCore, FandomStat};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqQuery {
    limit: Option<u32>,
}

//most active fandoms, ranked by how much gets posted in them
pub async fn task(
    req: HttpRequest,
    state: web::Data<AppState>,
    req_query: web::Query<ReqQuery>
) -> Result<HttpResponse, Error> {
    require_access(
        &req,
        &state.jwt,
        AccessRequirement::AnyToken
    )?;

    let limit = req_query.limit.unwrap_or(5).min(20) as i64;

    let db = &state.db;
    let collection = db.collection::<FandomStat>("fandom_stat");

    let result = collection.find(doc!{})
        .sort(doc! { "post_count": -1, "member_count": -1 })
        .limit(limit)
        .await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let mut cursor = result.unwrap();

    let mut fandoms = Vec::new();

    while let Some(result) = cursor.next().await {
        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let fandom_stat = result.unwrap();

        let collection = db.collection::<FandomCore>("fandom_core");
        let result = collection.find_one(
            doc!{ "uuid": &fandom_stat.uuid }
        ).await;

        if let Err(error) = result {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }

        let option = result.unwrap();
        if let None = option {
            return Ok(Response::not_found("fandom not found"));
        }

        let fandom_core = option.unwrap();

        fandoms.push(json!({
            "uuid": &fandom_core.uuid,
            "name": &fandom_core.name,
            "tag_name": &fandom_core.tag_name,
            "member_count": &fandom_stat.member_count,
            "post_count": &fandom_stat.post_count,
        }));
    }

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(fandoms)
    )
}
