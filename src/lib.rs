//! Domain core for the quiz platform.
//!
//! Owns the question approval lifecycle, the role/ownership authorization
//! policy guarding it, play-session reporting, and contact-form intake.
//! Persistence, HTTP routing, and session handling live in the surrounding
//! application; this crate makes the decisions and hands back the results.

pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod policy;
pub mod reports;
pub mod workflow;

pub use config::Limits;
pub use error::{Error, Result};
pub use models::{Question, QuestionStatus, Role, User};
pub use policy::{Decision, QuestionAction, QuestionPolicy};
