use mongo_app::configuration::{get_configuration, Settings};
use mongo_app::domain::ConnectionString;
use mongo_app::startup::Application;
use mongo_app::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub connection_string: ConnectionString,
    pub api_client: Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> Response {
        self.api_client
            .get(&format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_hello(&self) -> Response {
        self.get("/").await
    }

    pub async fn get_health_check(&self) -> Response {
        self.get("/health_check").await
    }

    pub async fn get_database_health_check(&self) -> Response {
        self.get("/health_check/database").await
    }
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Each app gets a random port and its own database name.
pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        c.database.database_name = Uuid::new_v4().to_string();
        c.application.port = 0;
        customise(&mut c);
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application");

    let application_port = application.port();
    let connection_string = application.connection_string().clone();
    let address = format!("http://127.0.0.1:{}", application_port);
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        connection_string,
        api_client: Client::new(),
    }
}
