use actix_web::web;

use crate::{
    configuration::DatabaseSettings,
    database::{get_database, ClientOptionsError},
    domain::ConnectionString,
    routes,
    service::AppService,
};

/// The application's object graph: connection string, service and controller routes.
///
/// Assembled once at startup and cloned into every actix worker. Clones share the
/// same service instance.
#[derive(Clone)]
pub struct AppModule {
    connection_string: ConnectionString,
    service: web::Data<AppService>,
}

impl AppModule {
    #[tracing::instrument(name = "Assembling the application module", skip(settings))]
    pub async fn new(settings: &DatabaseSettings) -> Result<Self, ClientOptionsError> {
        let connection_string = settings.connection_string();
        tracing::info!(
            connection_string = %connection_string.redacted(),
            "Resolved the database connection string"
        );

        let database = get_database(&connection_string, settings).await?;
        let service = AppService::new(database);

        Ok(Self {
            connection_string,
            service: web::Data::new(service),
        })
    }

    pub fn connection_string(&self) -> &ConnectionString {
        &self.connection_string
    }

    pub fn service(&self) -> &AppService {
        &self.service
    }

    /// Registers the service as shared data and mounts the controller.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.service.clone());
        routes::configure(cfg);
    }
}
