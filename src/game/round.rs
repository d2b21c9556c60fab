use serde::Serialize;

use super::{board::Board, catalog::TileCatalog};
use crate::{
    lexicon::Lexicon,
    models::{CellRole, Letter},
};

/// Result of scoring an accepted word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub word: String,
    /// Total score for the word, multipliers applied
    pub score: u32,
    pub word_doubled: bool,
    /// Tiles used up by the word, in board order
    #[serde(skip)]
    pub consumed: Vec<Letter>,
}

/// Why a submission did not score. The display text is shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Please construct a word")]
    EmptyWord,
    #[error("Invalid word: {0}")]
    InvalidWord(String),
    #[error("This round has already been scored")]
    RoundClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RoundPhase {
    AwaitingSubmission,
    Scored(ScoreResult),
    /// The last attempt failed; the round is still open
    Rejected,
}

/// Validates and scores the word on the board, tracking the round phase
#[derive(Debug)]
pub struct RoundEngine {
    phase: RoundPhase,
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundEngine {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::AwaitingSubmission,
        }
    }

    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    /// Whether tiles may still be moved and submitted this round
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, RoundPhase::Scored(_))
    }

    /// Back to `AwaitingSubmission` after the player touches the board again
    pub fn reopen(&mut self) {
        if self.phase == RoundPhase::Rejected {
            self.phase = RoundPhase::AwaitingSubmission;
        }
    }

    /// Start a fresh round
    pub fn reset(&mut self) {
        self.phase = RoundPhase::AwaitingSubmission;
    }

    /// Judge the board. An empty row leaves the phase untouched; an invalid
    /// word moves to `Rejected`; a valid one closes the round as `Scored`.
    pub fn submit(
        &mut self,
        board: &Board,
        lexicon: &Lexicon,
        catalog: &TileCatalog,
    ) -> Result<ScoreResult, Rejection> {
        if !self.is_open() {
            return Err(Rejection::RoundClosed);
        }

        match Self::evaluate(board, lexicon, catalog) {
            Ok(result) => {
                self.phase = RoundPhase::Scored(result.clone());
                Ok(result)
            }
            Err(rejection @ Rejection::InvalidWord(_)) => {
                self.phase = RoundPhase::Rejected;
                Err(rejection)
            }
            Err(rejection) => Err(rejection),
        }
    }

    /// Validate the spelled word, then score it. Single letters never count.
    pub fn evaluate(
        board: &Board,
        lexicon: &Lexicon,
        catalog: &TileCatalog,
    ) -> Result<ScoreResult, Rejection> {
        let word = board.spelled_word();
        if word.is_empty() {
            return Err(Rejection::EmptyWord);
        }
        // Blanks are not wildcards
        let has_blank = board.occupied_cells().iter().any(|(_, l)| l.is_blank());
        if has_blank || word.chars().count() == 1 || !lexicon.is_valid_word(&word) {
            return Err(Rejection::InvalidWord(word));
        }

        Ok(Self::calculate_score(board, catalog, word))
    }

    /// Scoring rules:
    /// - each tile is worth its catalog value
    /// - DL doubles that tile
    /// - DW doubles the whole word, applied after every tile is summed
    /// - totals saturate at `u32::MAX`
    fn calculate_score(board: &Board, catalog: &TileCatalog, word: String) -> ScoreResult {
        let mut total: u32 = 0;
        let mut word_doubled = false;
        let mut consumed = Vec::new();

        for (cell, letter) in board.occupied_cells() {
            let base = catalog.value_of(letter).unwrap_or_else(|| {
                tracing::warn!("No tile definition for {}, scoring it as 0", letter);
                0
            });

            let tile_score = match cell.role {
                CellRole::DoubleWord => {
                    word_doubled = true;
                    base
                }
                CellRole::DoubleLetter => base.saturating_mul(2),
                CellRole::Plain => base,
            };

            total = total.saturating_add(tile_score);
            consumed.push(letter);
        }

        if word_doubled {
            total = total.saturating_mul(2);
        }

        ScoreResult {
            word,
            score: total,
            word_doubled,
            consumed,
        }
    }
}
