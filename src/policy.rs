//! Question lifecycle authorization.
//!
//! Pure decision table over (action, role, ownership, status). No I/O, no
//! mutation; every call is independent. Denials carry a fixed reason and
//! surface to the HTTP layer as 403. Malformed calls (a record-scoped action
//! without a question) are invalid input, never a denial.

use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Question, Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionAction {
    ViewAny,
    View,
    Create,
    Update,
    Delete,
    Approve,
    Reject,
}

impl QuestionAction {
    pub const ALL: [QuestionAction; 7] = [
        QuestionAction::ViewAny,
        QuestionAction::View,
        QuestionAction::Create,
        QuestionAction::Update,
        QuestionAction::Delete,
        QuestionAction::Approve,
        QuestionAction::Reject,
    ];

    /// Whether the action targets a specific question record.
    pub fn requires_question(&self) -> bool {
        !matches!(self, QuestionAction::ViewAny | QuestionAction::Create)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionAction::ViewAny => "view_any",
            QuestionAction::View => "view",
            QuestionAction::Create => "create",
            QuestionAction::Update => "update",
            QuestionAction::Delete => "delete",
            QuestionAction::Approve => "approve",
            QuestionAction::Reject => "reject",
        }
    }
}

pub const DENY_VIEW_NOT_OWNER: &str = "You can only view your own questions";
pub const DENY_CREATE_CORRECTOR: &str = "Correctors are not allowed to create questions";
pub const DENY_UPDATE_NOT_OWNER: &str = "You can only edit your own questions";
pub const DENY_UPDATE_LOCKED: &str = "Only pending or rejected questions can be edited";
pub const DENY_DELETE: &str = "Only managers can delete questions";
pub const DENY_REVIEW: &str = "Only managers and correctors can review questions";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision")]
pub enum Decision {
    Allow,
    Deny { reason: &'static str },
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Suggested status for the calling layer: 200 for allow, 403 for deny.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Decision::Allow => StatusCode::OK,
            Decision::Deny { .. } => StatusCode::FORBIDDEN,
        }
    }

    /// Turn a denial into the crate error carrying its reason.
    pub fn authorize(self) -> Result<()> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny { reason } => Err(Error::PermissionDenied { reason }),
        }
    }
}

pub struct QuestionPolicy;

impl QuestionPolicy {
    /// Anyone may browse the question listing.
    pub fn view_any(_user: &User) -> Decision {
        Decision::Allow
    }

    pub fn view(user: &User, question: &Question) -> Decision {
        match user.role {
            Role::Manager | Role::Corrector => Decision::Allow,
            Role::General if question.owned_by(user) => Decision::Allow,
            Role::General => Decision::Deny {
                reason: DENY_VIEW_NOT_OWNER,
            },
        }
    }

    pub fn create(user: &User) -> Decision {
        match user.role {
            Role::Corrector => Decision::Deny {
                reason: DENY_CREATE_CORRECTOR,
            },
            Role::Manager | Role::General => Decision::Allow,
        }
    }

    pub fn update(user: &User, question: &Question) -> Decision {
        match user.role {
            Role::Manager | Role::Corrector => Decision::Allow,
            Role::General if !question.owned_by(user) => Decision::Deny {
                reason: DENY_UPDATE_NOT_OWNER,
            },
            Role::General if question.status.is_editable() => Decision::Allow,
            Role::General => Decision::Deny {
                reason: DENY_UPDATE_LOCKED,
            },
        }
    }

    pub fn delete(user: &User, _question: &Question) -> Decision {
        match user.role {
            Role::Manager => Decision::Allow,
            Role::Corrector | Role::General => Decision::Deny {
                reason: DENY_DELETE,
            },
        }
    }

    pub fn approve(user: &User, _question: &Question) -> Decision {
        Self::review(user)
    }

    pub fn reject(user: &User, _question: &Question) -> Decision {
        Self::review(user)
    }

    fn review(user: &User) -> Decision {
        match user.role {
            Role::Manager | Role::Corrector => Decision::Allow,
            Role::General => Decision::Deny {
                reason: DENY_REVIEW,
            },
        }
    }

    /// Single entry point for callers that dispatch on an action name.
    ///
    /// Record-scoped actions without a question are a caller bug and come
    /// back as `InvalidInput`, distinct from any permission denial.
    pub fn decide(
        action: QuestionAction,
        user: &User,
        question: Option<&Question>,
    ) -> Result<Decision> {
        let decision = match action {
            QuestionAction::ViewAny => Self::view_any(user),
            QuestionAction::Create => Self::create(user),
            QuestionAction::View => Self::view(user, Self::subject(action, question)?),
            QuestionAction::Update => Self::update(user, Self::subject(action, question)?),
            QuestionAction::Delete => Self::delete(user, Self::subject(action, question)?),
            QuestionAction::Approve => Self::approve(user, Self::subject(action, question)?),
            QuestionAction::Reject => Self::reject(user, Self::subject(action, question)?),
        };
        Ok(decision)
    }

    fn subject<'a>(
        action: QuestionAction,
        question: Option<&'a Question>,
    ) -> Result<&'a Question> {
        question.ok_or_else(|| {
            Error::InvalidInput(format!(
                "action '{}' requires a question record",
                action.as_str()
            ))
        })
    }
}
