pub mod contact_submission;
pub mod email_client;
pub mod newsletter_signup;
pub mod notification_email;

pub use crate::domain::contact_submission::ContactSubmission;
pub use crate::domain::email_client::{DispatchError, EmailClient};
pub use crate::domain::newsletter_signup::NewsletterSignup;
pub use crate::domain::notification_email::{EmailIdentity, NotificationEmail};
