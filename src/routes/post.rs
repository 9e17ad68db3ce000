use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/post")
        //Create
        .route(
          "",
          web::post().to(Handler::Post::Create::task)
        )
        //Get
        .route(
          "",
          web::get().to(Handler::Post::Get::task)
        )
        //Delete
        .route(
          "/{uuid}",
          web::delete().to(Handler::Post::Delete::task)
        )
        //Vote
        .route(
          "/{uuid}/vote",
          web::post().to(Handler::Post::Vote::task)
        )
    );
}
