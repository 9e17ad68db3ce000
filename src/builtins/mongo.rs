use mongodb::{ bson::doc, Client, Database };
use super::config::Config;

pub async fn connect(config: &Config) -> Result<Database, String> {
    let result = Client::with_uri_str(&config.mongo_uri).await;

    if let Err(error) = result {
        return Err(error.to_string());
    }

    let client = result.unwrap();
    let db = client.database(&config.mongo_database);

    // fail at startup if the server is unreachable
    if let Err(error) = db.run_command(doc! { "ping": 1 }).await {
        return Err(error.to_string());
    }

    Ok(db)
}
