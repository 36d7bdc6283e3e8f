use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published quiz game: an ordered set of approved questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: Uuid,
    pub title: String,
    pub question_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// One player's run through a game. A session with no `finished_at` was
/// abandoned mid-game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySession {
    pub id: Uuid,
    pub game_id: Uuid,
    pub player_id: Uuid,
    pub score: i64,
    pub questions_answered: u32,
    pub questions_correct: u32,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl PlaySession {
    pub fn is_completed(&self) -> bool {
        self.finished_at.is_some()
    }
}
