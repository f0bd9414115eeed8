use crate::error::DbError;
use configuration::Settings;
use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client,
};

/// Establishes a client for the MongoDB deployment named in the settings.
///
/// The Stable API is pinned to version 1, and the `admin` database is pinged
/// once so that an unreachable deployment fails at startup rather than on the
/// first request. The returned client owns its own connection pool and is
/// cheap to clone.
pub async fn connect(settings: &Settings) -> Result<Client, DbError> {
    if settings.mongodb_uri.trim().is_empty() {
        return Err(DbError::ConnectionConfigError(
            "MONGODB_URI must be set.".to_string(),
        ));
    }

    let mut options = ClientOptions::parse(&settings.mongodb_uri).await?;
    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

    let client = Client::with_options(options)?;
    ping(&client).await?;

    tracing::info!("Pinged your deployment. You successfully connected to MongoDB!");
    Ok(client)
}

/// Runs the `ping` command against the `admin` database.
pub async fn ping(client: &Client) -> Result<(), DbError> {
    client.database("admin").run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
