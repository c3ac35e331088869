use std::{error::Error, fmt::Debug};

use mongodb::{
    bson::doc,
    error::ErrorKind,
    options::{ClientOptions, Credential},
    Client, Database,
};
use secrecy::ExposeSecret;

use crate::{configuration::DatabaseSettings, domain::ConnectionString, telemetry::error_chain_fmt};

/// Reported to the server in the handshake.
pub const APP_NAME: &str = "mongo_app";

pub struct ClientOptionsError(mongodb::error::Error);

impl std::fmt::Display for ClientOptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The MongoDB driver rejected the connection string"
        )
    }
}

impl Error for ClientOptionsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl Debug for ClientOptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub struct PingError(mongodb::error::Error);

impl PingError {
    /// No server could be selected within the server selection timeout.
    pub fn is_unreachable(&self) -> bool {
        matches!(*self.0.kind, ErrorKind::ServerSelection { .. })
    }
}

impl std::fmt::Display for PingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The database did not answer the ping command")
    }
}

impl Error for PingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl Debug for PingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Lets the driver parse the descriptor itself, so hosts, ports and URI credentials
/// are exactly what the connection string says.
///
/// Configured credentials only apply when the URI carries none, and authenticate
/// against the descriptor's auth source.
pub async fn client_options(
    connection_string: &ConnectionString,
    settings: &DatabaseSettings,
) -> Result<ClientOptions, ClientOptionsError> {
    let mut options = ClientOptions::parse(connection_string.driver_uri())
        .await
        .map_err(ClientOptionsError)?;
    options.app_name = Some(APP_NAME.to_string());

    if options.credential.is_some() {
        if settings.username.is_some() || settings.password.is_some() {
            tracing::warn!("The connection string carries credentials, ignoring the configured ones");
        }
        return Ok(options);
    }

    options.credential = match (&settings.username, &settings.password) {
        (Some(username), password) => Some(
            Credential::builder()
                .username(username.clone())
                .password(password.as_ref().map(|p| p.expose_secret().clone()))
                .source(connection_string.auth_source().to_string())
                .build(),
        ),
        (None, Some(_)) => {
            tracing::warn!("A database password is configured without a username, ignoring it");
            None
        }
        (None, None) => None,
    };

    Ok(options)
}

/// Builds a client without touching the network; the driver connects on first use.
#[tracing::instrument(
    name = "Creating the database client",
    skip(connection_string, settings),
    fields(
        connection_string = %connection_string.redacted(),
        database_name = %settings.database_name
    )
)]
pub async fn get_database(
    connection_string: &ConnectionString,
    settings: &DatabaseSettings,
) -> Result<Database, ClientOptionsError> {
    let options = client_options(connection_string, settings).await?;
    let client = Client::with_options(options).map_err(ClientOptionsError)?;
    Ok(client.database(&settings.database_name))
}

#[tracing::instrument(name = "Pinging the database", skip(database), fields(database = %database.name()))]
pub async fn ping(database: &Database) -> Result<(), PingError> {
    database
        .run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to ping the database: {:?}", e);
            PingError(e)
        })?;
    Ok(())
}
