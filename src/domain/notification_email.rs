use serde::Deserialize;

/// A named mailbox, e.g. the website's outbound sender or the inbox
/// notifications are delivered to.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailIdentity {
    pub email: String,
    pub name: String,
}

/// A composed notification, ready to hand to an email provider.
#[derive(Debug)]
pub struct NotificationEmail {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}
