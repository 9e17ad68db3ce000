use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/comment")
        //Create
        .route(
          "",
          web::post().to(Handler::Comment::Create::task)
        )
        //Thread for a post
        .route(
          "/thread/{post_id}",
          web::get().to(Handler::Comment::Thread::task)
        )
        //Reply
        .route(
          "/{uuid}/reply",
          web::post().to(Handler::Comment::Reply::task)
        )
        //Vote
        .route(
          "/{uuid}/vote",
          web::post().to(Handler::Comment::Vote::task)
        )
        //Delete
        .route(
          "/{uuid}",
          web::delete().to(Handler::Comment::Delete::task)
        )
    );
}
