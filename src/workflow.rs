//! Question lifecycle transitions.
//!
//! Every transition is policy-gated and operates on in-memory question
//! values; the caller persists whatever comes back. Review actions only act
//! on pending questions, and a rejected question returns to review once its
//! author revises it.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::config::Limits;
use crate::error::{Error, Result};
use crate::models::{AnswerOption, CreateQuestion, Question, QuestionStatus, UpdateQuestion, User};
use crate::policy::QuestionPolicy;

pub struct QuestionWorkflow {
    limits: Limits,
}

impl QuestionWorkflow {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Author a new question. It enters the review queue as pending.
    pub fn submit(&self, user: &User, payload: CreateQuestion) -> Result<Question> {
        QuestionPolicy::create(user).authorize()?;
        payload.validate()?;
        self.check_prompt(&payload.prompt)?;
        self.check_options(&payload.options)?;

        let now = Utc::now();
        let question = Question {
            id: Uuid::new_v4(),
            created_by: user.id,
            prompt: payload.prompt,
            options: payload.options,
            status: QuestionStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        tracing::info!(
            question_id = %question.id,
            user_id = %user.id,
            "question submitted for review"
        );

        Ok(question)
    }

    /// Edit a question. A rejected question re-enters review as pending.
    pub fn revise(
        &self,
        user: &User,
        mut question: Question,
        payload: UpdateQuestion,
    ) -> Result<Question> {
        QuestionPolicy::update(user, &question).authorize()?;
        payload.validate()?;

        if let Some(prompt) = payload.prompt {
            self.check_prompt(&prompt)?;
            question.prompt = prompt;
        }
        if let Some(options) = payload.options {
            self.check_options(&options)?;
            question.options = options;
        }
        if question.status == QuestionStatus::Rejected {
            question.status = QuestionStatus::Pending;
        }
        question.updated_at = Utc::now();

        tracing::info!(
            question_id = %question.id,
            user_id = %user.id,
            status = question.status.as_str(),
            "question revised"
        );

        Ok(question)
    }

    pub fn approve(&self, user: &User, mut question: Question) -> Result<Question> {
        QuestionPolicy::approve(user, &question).authorize()?;
        self.check_pending(&question)?;

        question.status = QuestionStatus::Approved;
        question.updated_at = Utc::now();

        tracing::info!(
            question_id = %question.id,
            reviewer_id = %user.id,
            "question approved"
        );

        Ok(question)
    }

    pub fn reject(&self, user: &User, mut question: Question, reason: &str) -> Result<Question> {
        if reason.trim().is_empty() {
            return Err(Error::BadRequest(
                "rejection reason is required".to_string(),
            ));
        }
        QuestionPolicy::reject(user, &question).authorize()?;
        self.check_pending(&question)?;

        question.status = QuestionStatus::Rejected;
        question.updated_at = Utc::now();

        tracing::info!(
            question_id = %question.id,
            reviewer_id = %user.id,
            reason,
            "question rejected"
        );

        Ok(question)
    }

    /// Permanently remove a question. The caller performs the actual delete.
    pub fn discard(&self, user: &User, question: Question) -> Result<()> {
        QuestionPolicy::delete(user, &question).authorize()?;

        tracing::info!(
            question_id = %question.id,
            user_id = %user.id,
            "question discarded"
        );

        Ok(())
    }

    fn check_pending(&self, question: &Question) -> Result<()> {
        if question.status != QuestionStatus::Pending {
            return Err(Error::Conflict(format!(
                "question {} is not pending review",
                question.id
            )));
        }
        Ok(())
    }

    fn check_prompt(&self, prompt: &str) -> Result<()> {
        let chars = prompt.chars().count();
        if chars > self.limits.max_prompt_chars {
            return Err(Error::BadRequest(format!(
                "prompt exceeds {} characters",
                self.limits.max_prompt_chars
            )));
        }
        Ok(())
    }

    fn check_options(&self, options: &[AnswerOption]) -> Result<()> {
        let count = options.len();
        if count < self.limits.min_options || count > self.limits.max_options {
            return Err(Error::BadRequest(format!(
                "questions must have between {} and {} answer options",
                self.limits.min_options, self.limits.max_options
            )));
        }
        Ok(())
    }
}
