mod connection_string;
mod database_host;

pub use connection_string::{ConnectionString, AUTH_SOURCE, PORT, SERVER_SELECTION_TIMEOUT_MS};
pub use database_host::{DatabaseHost, DEFAULT_HOST};
