use std::net::TcpListener;

use actix_web::{dev::Server, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::{configuration::Settings, domain::ConnectionString, module::AppModule};

pub struct Application {
    port: u16,
    connection_string: ConnectionString,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let module = AppModule::new(&configuration.database)
            .await
            .context("Failed to assemble the application module")?;
        let connection_string = module.connection_string().clone();

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();
        tracing::info!(%address, port, "Listening for HTTP requests");

        let server = run(listener, module)?;

        Ok(Self {
            port,
            connection_string,
            server,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The descriptor the module resolved and logged at startup.
    pub fn connection_string(&self) -> &ConnectionString {
        &self.connection_string
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, module: AppModule) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        let module = module.clone();
        App::new()
            .wrap(TracingLogger::default())
            .configure(move |cfg| module.configure(cfg))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
