use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/fandom")
        //Request creation
        .route(
          "/request",
          web::post().to(Handler::Fandom::Request::task)
        )
        //Review creation request
        .route(
          "/request/{uuid}/review",
          web::post().to(Handler::Fandom::ReviewRequest::task)
        )
        //Top active
        .route(
          "/top",
          web::get().to(Handler::Fandom::Top::task)
        )
        //Get
        .route(
          "/{uuid}",
          web::get().to(Handler::Fandom::Get::task)
        )
        //Join
        .route(
          "/{uuid}/join",
          web::post().to(Handler::Fandom::Join::task)
        )
        //Leave
        .route(
          "/{uuid}/join",
          web::delete().to(Handler::Fandom::Leave::task)
        )
    );
}
