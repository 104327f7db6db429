use async_trait::async_trait;

use crate::domain::notification_email::NotificationEmail;
use crate::utils::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum DispatchError {
    #[error("the email provider returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[async_trait]
pub trait EmailClient {
    async fn send_notification(&self, email: &NotificationEmail) -> Result<(), DispatchError>;
}
