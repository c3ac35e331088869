use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

use crate::{database::PingError, service::AppService, telemetry::error_chain_fmt};

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[derive(serde::Serialize)]
pub struct DatabaseStatus<'a> {
    status: &'static str,
    database: &'a str,
}

#[derive(thiserror::Error)]
pub enum HealthCheckError {
    #[error("The database is unreachable")]
    DatabaseUnavailable(#[source] PingError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for HealthCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for HealthCheckError {
    fn status_code(&self) -> StatusCode {
        match self {
            HealthCheckError::DatabaseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HealthCheckError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[tracing::instrument(
    name = "Checking database health",
    skip(service),
    fields(database = %service.database_name())
)]
pub async fn database_health_check(
    service: web::Data<AppService>,
) -> Result<HttpResponse, HealthCheckError> {
    service.ping().await.map_err(|e| {
        if e.is_unreachable() {
            HealthCheckError::DatabaseUnavailable(e)
        } else {
            HealthCheckError::UnexpectedError(
                anyhow::Error::new(e).context("Failed to ping the database"),
            )
        }
    })?;

    Ok(HttpResponse::Ok().json(DatabaseStatus {
        status: "up",
        database: service.database_name(),
    }))
}
