use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/report")
        //Create
        .route(
          "",
          web::post().to(Handler::Report::Create::task)
        )
        //List
        .route(
          "",
          web::get().to(Handler::Report::List::task)
        )
        //Confirmation step
        .route(
          "/{uuid}/confirmation",
          web::get().to(Handler::Report::Confirmation::task)
        )
        //Review
        .route(
          "/{uuid}/review",
          web::post().to(Handler::Report::Review::task)
        )
    );
}
