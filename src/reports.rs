//! Game reports for the admin panel.
//!
//! Pure aggregation over play sessions supplied by the caller; grouping is
//! deterministic (ordered by game id).

use std::collections::BTreeMap;

use serde::Serialize;
use uuid::Uuid;

use crate::config::Limits;
use crate::models::PlaySession;

#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub game_id: Uuid,
    pub sessions_played: u64,
    pub sessions_completed: u64,
    pub average_score: f64,
    pub top_score: i64,
    /// Fraction of answered questions that were correct, 0.0 when nothing
    /// was answered.
    pub accuracy: f64,
    /// Highest scores first, capped at the configured page size.
    pub top_scores: Vec<i64>,
}

pub struct ReportService {
    limits: Limits,
}

impl ReportService {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Report for a single game. Sessions for other games are ignored.
    pub fn game_report(&self, game_id: Uuid, sessions: &[PlaySession]) -> GameReport {
        let sessions: Vec<&PlaySession> =
            sessions.iter().filter(|s| s.game_id == game_id).collect();

        let sessions_played = sessions.len() as u64;
        let sessions_completed = sessions.iter().filter(|s| s.is_completed()).count() as u64;

        let total_score: i64 = sessions.iter().map(|s| s.score).sum();
        let average_score = if sessions.is_empty() {
            0.0
        } else {
            total_score as f64 / sessions.len() as f64
        };

        let answered: u64 = sessions.iter().map(|s| s.questions_answered as u64).sum();
        let correct: u64 = sessions.iter().map(|s| s.questions_correct as u64).sum();
        let accuracy = if answered == 0 {
            0.0
        } else {
            correct as f64 / answered as f64
        };

        let mut top_scores: Vec<i64> = sessions.iter().map(|s| s.score).collect();
        top_scores.sort_unstable_by(|a, b| b.cmp(a));
        top_scores.truncate(self.limits.report_page_size);
        let top_score = top_scores.first().copied().unwrap_or(0);

        GameReport {
            game_id,
            sessions_played,
            sessions_completed,
            average_score,
            top_score,
            accuracy,
            top_scores,
        }
    }

    /// One report per game present in the slice.
    pub fn reports_by_game(&self, sessions: &[PlaySession]) -> Vec<GameReport> {
        let mut by_game: BTreeMap<Uuid, Vec<PlaySession>> = BTreeMap::new();
        for session in sessions {
            by_game
                .entry(session.game_id)
                .or_default()
                .push(session.clone());
        }

        by_game
            .into_iter()
            .map(|(game_id, sessions)| self.game_report(game_id, &sessions))
            .collect()
    }
}
