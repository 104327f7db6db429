pub mod mailjet_email_client;

pub use crate::adapters::mailjet_email_client::MailjetEmailClient;
