use crate::domain::notification_email::NotificationEmail;

/// A validated contact form submission.
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Composes the notification delivered to the site owner's inbox.
    ///
    /// Both bodies enumerate every submitted field. Newlines in the message are
    /// converted to `<br>` in the HTML variant only.
    pub fn notification_email(&self) -> NotificationEmail {
        let phone = self.phone.as_deref().unwrap_or("Not provided");

        let text_body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\nSubject: {}\n\nMessage:\n{}",
            self.name, self.email, phone, self.subject, self.message
        );
        let html_body = format!(
            "<h3>New Contact Form Submission</h3>\
            <p><strong>Name:</strong> {}</p>\
            <p><strong>Email:</strong> {}</p>\
            <p><strong>Phone:</strong> {}</p>\
            <p><strong>Subject:</strong> {}</p>\
            <p><strong>Message:</strong></p>\
            <p>{}</p>",
            self.name,
            self.email,
            phone,
            self.subject,
            self.message.replace('\n', "<br>")
        );

        NotificationEmail {
            subject: format!("Contact Form: {}", self.subject),
            text_body,
            html_body,
        }
    }
}
