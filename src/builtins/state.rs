use mongodb::Database;
use super::config::Config;
use super::{ jwt, mongo };

//constructed once in main and handed to actix as web::Data
pub struct AppState {
    pub db: Database,
    pub jwt: jwt::Keys,
}

impl AppState {
    pub async fn init(config: &Config) -> Result<AppState, String> {
        let db = mongo::connect(config).await?;

        Ok(AppState {
            db,
            jwt: jwt::Keys::from_config(config),
        })
    }
}
