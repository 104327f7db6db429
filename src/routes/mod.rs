pub mod contact;
pub mod health_check;
pub mod newsletter;
