use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "a valid email address is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 150, message = "subject must be 1-150 characters"))]
    pub subject: String,
    #[validate(length(min = 1, message = "message body must not be empty"))]
    pub body: String,
}
