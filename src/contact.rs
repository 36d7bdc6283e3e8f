//! Contact form intake.
//!
//! Submissions are validated and recorded via structured logging only; no
//! mail delivery or storage happens here. Callers get a receipt id they can
//! echo back to the visitor.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::config::Limits;
use crate::error::{Error, Result};
use crate::models::ContactMessage;

#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

pub struct ContactService {
    limits: Limits,
}

impl ContactService {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn submit(&self, message: ContactMessage) -> Result<ContactReceipt> {
        message.validate()?;

        let chars = message.body.chars().count();
        if chars > self.limits.max_contact_body_chars {
            return Err(Error::BadRequest(format!(
                "message body exceeds {} characters",
                self.limits.max_contact_body_chars
            )));
        }

        let receipt = ContactReceipt {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
        };

        tracing::info!(
            receipt_id = %receipt.id,
            from = %message.email,
            subject = %message.subject,
            body_chars = chars,
            "contact message received"
        );

        Ok(receipt)
    }
}
