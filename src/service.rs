use mongodb::Database;

use crate::database::{ping, PingError};

pub const GREETING: &str = "Hello World!";

/// Application service. Receives its database handle at construction time.
pub struct AppService {
    database: Database,
}

impl AppService {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn get_hello(&self) -> &'static str {
        GREETING
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    pub async fn ping(&self) -> Result<(), PingError> {
        ping(&self.database).await
    }
}
