use crate::domain::contact_submission::ContactSubmission;
use crate::domain::email_client::{DispatchError, EmailClient};
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Failed to deliver the notification email")]
    DeliveryError(#[source] DispatchError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The client-facing message is fixed per failure class. Provider detail
        // stays in the error chain and only ever reaches the logs.
        let message = match self {
            ContactError::ValidationError(_) => "Missing required fields",
            ContactError::DeliveryError(_) => "Failed to send email",
            ContactError::UnexpectedError(_) => "Internal server error",
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({ "error": message }))
    }
}

#[derive(serde::Deserialize)]
pub struct FormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl TryFrom<FormData> for ContactSubmission {
    type Error = String;

    fn try_from(value: FormData) -> Result<Self, Self::Error> {
        let name = require(value.name, "name")?;
        let email = require(value.email, "email")?;
        let subject = require(value.subject, "subject")?;
        let message = require(value.message, "message")?;

        Ok(ContactSubmission {
            name,
            email,
            phone: value.phone.filter(|phone| !phone.is_empty()),
            subject,
            message,
        })
    }
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, email_client)
)]
pub async fn submit_contact(
    form: web::Json<FormData>,
    email_client: web::Data<dyn EmailClient>,
) -> Result<HttpResponse, ContactError> {
    let submission: ContactSubmission =
        form.0.try_into().map_err(ContactError::ValidationError)?;

    email_client
        .send_notification(&submission.notification_email())
        .await
        .map_err(|e| match e {
            rejection @ DispatchError::Rejected { .. } => ContactError::DeliveryError(rejection),
            DispatchError::Unexpected(cause) => ContactError::UnexpectedError(cause),
        })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

fn require(field: Option<String>, field_name: &str) -> Result<String, String> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("{} is missing or empty", field_name)),
    }
}
