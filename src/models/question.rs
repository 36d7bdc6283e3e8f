use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::error::Error;
use crate::models::User;

/// Lifecycle stage of a quiz question. Closed set; an unrecognized status
/// string coming from upstream storage is a data error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    Pending,
    Approved,
    Rejected,
}

impl QuestionStatus {
    /// Editable states are exactly {pending, rejected}.
    pub fn is_editable(&self) -> bool {
        matches!(self, QuestionStatus::Pending | QuestionStatus::Rejected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Pending => "pending",
            QuestionStatus::Approved => "approved",
            QuestionStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for QuestionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(QuestionStatus::Pending),
            "approved" => Ok(QuestionStatus::Approved),
            "rejected" => Ok(QuestionStatus::Rejected),
            other => Err(Error::InvalidInput(format!(
                "unrecognized question status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub created_by: Uuid,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    pub status: QuestionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn owned_by(&self, user: &User) -> bool {
        self.created_by == user.id
    }
}

/// Authoring payload. Length caps beyond these floors come from `Limits`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
    #[validate(custom(function = "exactly_one_correct"))]
    pub options: Vec<AnswerOption>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateQuestion {
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: Option<String>,
    #[validate(custom(function = "exactly_one_correct"))]
    pub options: Option<Vec<AnswerOption>>,
}

fn exactly_one_correct(options: &[AnswerOption]) -> Result<(), ValidationError> {
    let correct = options.iter().filter(|o| o.correct).count();
    if correct != 1 {
        let mut err = ValidationError::new("exactly_one_correct");
        err.message = Some("exactly one option must be marked correct".into());
        return Err(err);
    }
    if options.iter().any(|o| o.text.trim().is_empty()) {
        let mut err = ValidationError::new("empty_option");
        err.message = Some("answer options must not be empty".into());
        return Err(err);
    }
    Ok(())
}
