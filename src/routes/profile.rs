use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profile")
        //Get
        .route(
          "/{uuid}",
          web::get().to(Handler::Profile::Get::task)
        )
        //Follow
        .route(
          "/{uuid}/follow",
          web::post().to(Handler::Profile::Follow::task)
        )
        //Unfollow
        .route(
          "/{uuid}/follow",
          web::delete().to(Handler::Profile::Unfollow::task)
        )
        //Follower count
        .route(
          "/{uuid}/follower-count",
          web::get().to(Handler::Profile::FollowerCount::task)
        )
    );
}
