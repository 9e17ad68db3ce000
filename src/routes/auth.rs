use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
        //Sign up
        .route(
          "/sign-up",
          web::post().to(Handler::Auth::SignUp::task)
        )
        //Sign in
        .route(
          "/sign-in",
          web::post().to(Handler::Auth::SignIn::task)
        )
        //Refresh access token
        .route(
          "/refresh",
          web::post().to(Handler::Auth::Refresh::task)
        )
        //Current session
        .route(
          "/myself",
          web::get().to(Handler::Auth::Myself::task)
        )
        //Admin check
        .route(
          "/is-admin",
          web::get().to(Handler::Auth::IsAdmin::task)
        )
        //Password reset
        .route(
          "/reset-request",
          web::post().to(Handler::Auth::ResetRequest::task)
        )
        .route(
          "/reset-confirm",
          web::post().to(Handler::Auth::ResetConfirm::task)
        )
    );
}
