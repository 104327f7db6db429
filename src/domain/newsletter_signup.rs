use crate::domain::notification_email::NotificationEmail;

/// A validated newsletter signup.
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    /// Composes the notification delivered to the site owner's inbox.
    pub fn notification_email(&self) -> NotificationEmail {
        NotificationEmail {
            subject: "New Newsletter Subscription".into(),
            text_body: format!("New newsletter subscription from:\nEmail: {}", self.email),
            html_body: format!(
                "<h3>New Newsletter Subscription</h3><p><strong>Email:</strong> {}</p>",
                self.email
            ),
        }
    }
}
