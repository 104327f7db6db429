use bms_site_api::configuration::get_configuration;
use bms_site_api::startup::Application;
use bms_site_api::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_newsletter(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/newsletter", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub async fn spawn_app() -> TestApp {
    // Launch a mock server to stand in for Mailjet's API
    let email_server = MockServer::start().await;
    let base_url = email_server.uri();

    spawn_app_with_provider_url(email_server, base_url).await
}

/// Spawns the application pointed at an address nothing listens on, so every
/// dispatch attempt fails at the network level.
pub async fn spawn_app_with_unreachable_provider() -> TestApp {
    let email_server = MockServer::start().await;

    spawn_app_with_provider_url(email_server, "http://127.0.0.1:1".to_string()).await
}

async fn spawn_app_with_provider_url(email_server: MockServer, base_url: String) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.application_port = 0;
        // Use the mock server as email API
        c.email_client.base_url = base_url;
        c
    };

    // Launch the application as a background task
    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://localhost:{}", application_port),
        email_server,
    }
}
