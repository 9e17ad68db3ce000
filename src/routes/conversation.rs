use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/conversation")
        //Create
        .route(
          "",
          web::post().to(Handler::Conversation::Create::task)
        )
        //List
        .route(
          "",
          web::get().to(Handler::Conversation::List::task)
        )
        //Send message
        .route(
          "/{uuid}/message",
          web::post().to(Handler::Conversation::Send::task)
        )
        //List messages
        .route(
          "/{uuid}/message",
          web::get().to(Handler::Conversation::Messages::task)
        )
    );
}
