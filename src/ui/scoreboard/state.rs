use crate::ui::mvi::UiState;
use uuid::Uuid;

/// Opaque identifier assigned to a match when it is created.
///
/// Intents still address matches by position. The id lets the view keep
/// its selection and pending amount forms on the same match after an
/// earlier one is deleted and the rest shift down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub score: u64,
}

impl Match {
    pub fn new() -> Self {
        Self::with_score(0)
    }

    pub fn with_score(score: u64) -> Self {
        Self {
            id: MatchId::new(),
            score,
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

/// The whole scoreboard: matches in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardState {
    pub matches: Vec<Match>,
}

impl UiState for ScoreboardState {}

/// One match at score 0.
impl Default for ScoreboardState {
    fn default() -> Self {
        Self::with_matches(1)
    }
}

impl ScoreboardState {
    pub fn with_matches(count: usize) -> Self {
        Self {
            matches: (0..count).map(|_| Match::new()).collect(),
        }
    }

    pub fn from_scores(scores: &[u64]) -> Self {
        Self {
            matches: scores.iter().copied().map(Match::with_score).collect(),
        }
    }

    pub fn scores(&self) -> Vec<u64> {
        self.matches.iter().map(|m| m.score).collect()
    }

    pub fn total(&self) -> u64 {
        self.matches
            .iter()
            .fold(0u64, |acc, m| acc.saturating_add(m.score))
    }

    pub fn position_of(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
