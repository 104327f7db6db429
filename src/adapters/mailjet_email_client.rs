use crate::domain::email_client::{DispatchError, EmailClient};
use crate::domain::notification_email::{EmailIdentity, NotificationEmail};

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    messages: Vec<Message<'a>>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Message<'a> {
    from: Participant<'a>,
    to: Vec<Participant<'a>>,
    subject: &'a str,
    text_part: &'a str,
    // PascalCase would render this field as "HtmlPart", which Mailjet ignores.
    #[serde(rename = "HTMLPart")]
    html_part: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Participant<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Debug, Clone)]
pub struct MailjetEmailClient {
    http_client: Client,
    base_url: String,
    sender: EmailIdentity,
    recipient: EmailIdentity,
    api_key: Secret<String>,
    secret_key: Secret<String>,
}

impl MailjetEmailClient {
    pub fn new(
        base_url: String,
        sender: EmailIdentity,
        recipient: EmailIdentity,
        api_key: Secret<String>,
        secret_key: Secret<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url,
            sender,
            recipient,
            api_key,
            secret_key,
        }
    }
}

#[async_trait]
impl EmailClient for MailjetEmailClient {
    async fn send_notification(&self, email: &NotificationEmail) -> Result<(), DispatchError> {
        let url = format!("{}/v3.1/send", self.base_url);

        let request_body = SendEmailRequest {
            messages: vec![Message {
                from: Participant {
                    email: &self.sender.email,
                    name: &self.sender.name,
                },
                to: vec![Participant {
                    email: &self.recipient.email,
                    name: &self.recipient.name,
                }],
                subject: &email.subject,
                text_part: &email.text_body,
                html_part: &email.html_body,
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                self.api_key.expose_secret(),
                Some(self.secret_key.expose_secret()),
            )
            .json(&request_body)
            .send()
            .await
            .context("Failed to execute the request to the email provider")?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected { status, body });
        }

        Ok(())
    }
}
