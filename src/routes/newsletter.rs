use crate::domain::email_client::{DispatchError, EmailClient};
use crate::domain::newsletter_signup::NewsletterSignup;
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum NewsletterError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to deliver the notification email")]
    DeliveryError(#[source] DispatchError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for NewsletterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for NewsletterError {
    fn status_code(&self) -> StatusCode {
        match self {
            NewsletterError::ValidationError(_) => StatusCode::BAD_REQUEST,
            NewsletterError::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            NewsletterError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            NewsletterError::ValidationError(_) => "Email is required",
            NewsletterError::DeliveryError(_) => "Failed to subscribe to newsletter",
            NewsletterError::UnexpectedError(_) => "Internal server error",
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

#[derive(serde::Deserialize)]
pub struct FormData {
    pub email: Option<String>,
}

impl TryFrom<FormData> for NewsletterSignup {
    type Error = String;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        match value.email {
            Some(email) if !email.is_empty() => Ok(NewsletterSignup { email }),
            _ => Err("email is missing or empty".into()),
        }
    }
}

#[tracing::instrument(name = "Handling a newsletter signup", skip(form, email_client))]
pub async fn subscribe(
    form: web::Json<FormData>,
    email_client: web::Data<dyn EmailClient>,
) -> Result<HttpResponse, NewsletterError> {
    let signup: NewsletterSignup = form.0.try_into().map_err(NewsletterError::ValidationError)?;

    email_client
        .send_notification(&signup.notification_email())
        .await
        .map_err(|e| match e {
            rejection @ DispatchError::Rejected { .. } => NewsletterError::DeliveryError(rejection),
            DispatchError::Unexpected(cause) => NewsletterError::UnexpectedError(cause),
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
