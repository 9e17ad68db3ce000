use actix_web::web;
use crate::Handler;

pub fn router(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/search")
        //Query
        .route(
          "",
          web::get().to(Handler::Search::Query::task)
        )
    );
}
