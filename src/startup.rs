use crate::adapters::mailjet_email_client::MailjetEmailClient;
use crate::configuration::{EmailClientSettings, Settings};
use crate::domain::email_client::EmailClient;
use crate::routes::contact::submit_contact;
use crate::routes::health_check::health_check;
use crate::routes::newsletter::subscribe;
use crate::telemetry::CustomLevelRootSpanBuilder;
use actix_web::dev::{Server, Service};
use actix_web::error::InternalError;
use actix_web::web::Data;
use actix_web::{web, App, HttpMessage, HttpResponse, HttpServer};
use reqwest::header::{HeaderName, HeaderValue};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::{RequestId, TracingLogger};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host_name, configuration.application.application_port
        ))?;

        let port = listener.local_addr().unwrap().port();
        let server = run(listener, configuration.email_client)?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(
    listener: TcpListener,
    email_settings: EmailClientSettings,
) -> Result<Server, std::io::Error> {
    let email_adapter = MailjetEmailClient::new(
        email_settings.base_url.clone(),
        email_settings.sender.clone(),
        email_settings.recipient.clone(),
        email_settings.api_key.clone(),
        email_settings.secret_key.clone(),
        email_settings.timeout(),
    );

    let server = HttpServer::new(move || {
        let email_client_arc: Arc<dyn EmailClient> = Arc::new(email_adapter.clone());
        let email_client_data: Data<dyn EmailClient> = Data::from(email_client_arc);

        // Unparseable request bodies surface as the generic internal error envelope,
        // not as the extractor's default 400.
        let json_config = web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| {
                InternalError::from_response(
                    err,
                    HttpResponse::InternalServerError()
                        .json(serde_json::json!({"error": "Internal server error"})),
                )
                .into()
            });

        App::new()
            .route("/health_check", web::get().to(health_check))
            .wrap_fn(|req, srv| {
                let request_id = req.extensions().get::<RequestId>().copied();
                let res = srv.call(req);
                async move {
                    let mut res = res.await?;
                    if let Some(request_id) = request_id {
                        res.headers_mut().insert(
                            HeaderName::from_static("x-request-id"),
                            // this unwrap never fails, since UUIDs are valid ASCII strings
                            HeaderValue::from_str(&request_id.to_string()).unwrap(),
                        );
                    }
                    Ok(res)
                }
            })
            .wrap(TracingLogger::<CustomLevelRootSpanBuilder>::new())
            .route("/api/contact", web::post().to(submit_contact))
            .route("/api/newsletter", web::post().to(subscribe))
            .app_data(email_client_data)
            .app_data(json_config)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
