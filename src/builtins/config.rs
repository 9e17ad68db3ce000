#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub jwt_access_secret: String,
    pub jwt_refresh_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Config, String> {
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<u16>() {
                Ok(port) => port,
                Err(_) => return Err("PORT must be a number".to_string()),
            },
            Err(_) => 8080,
        };

        Ok(Config {
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or("127.0.0.1".to_string()),
            port,
            mongo_uri: std::env::var("MONGO_URI")
                .map_err(|_| "MONGO_URI is required".to_string())?,
            mongo_database: std::env::var("MONGO_DATABASE")
                .unwrap_or("fanverse".to_string()),
            jwt_access_secret: std::env::var("JWT_ACCESS_SECRET")
                .map_err(|_| "JWT_ACCESS_SECRET is required".to_string())?,
            jwt_refresh_secret: std::env::var("JWT_REFRESH_SECRET")
                .map_err(|_| "JWT_REFRESH_SECRET is required".to_string())?,
        })
    }
}
