use actix_web::{ web, App, HttpServer };

pub mod model;
pub use model as Model;

pub mod handler;
pub use handler as Handler;

pub mod routes;
pub use routes as Routes;

pub mod middleware;
pub use middleware as Middleware;

pub mod builtins;
pub use builtins as BuiltIns;

pub mod utils;

use builtins::config::Config;
use builtins::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("configuration error: {}", error);
            std::process::exit(1);
        },
    };

    let state = match AppState::init(&config).await {
        Ok(state) => web::Data::new(state),
        Err(error) => {
            log::error!("failed to initialize application state: {}", error);
            std::process::exit(1);
        },
    };

    log::info!(
        "starting fanverse backend on {}:{}",
        config.bind_address,
        config.port,
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::Auth::router)
            .configure(routes::Profile::router)
            .configure(routes::Fandom::router)
            .configure(routes::Post::router)
            .configure(routes::Comment::router)
            .configure(routes::Report::router)
            .configure(routes::Conversation::router)
            .configure(routes::Search::router)
    })
    .bind((config.bind_address.clone(), config.port))?
    .run()
    .await
}
