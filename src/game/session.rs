use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use uuid::Uuid;

use super::{
    bag::TileBag,
    board::{Board, PlacementError, BOARD_LEN},
    catalog::TileCatalog,
    rack::Rack,
    round::{Rejection, RoundEngine, RoundPhase, ScoreResult},
};
use crate::{
    config::GameConfig,
    lexicon::Lexicon,
    models::{CellRole, Letter},
};

/// Startup data every session reads from. A session cannot be built without it.
#[derive(Debug)]
pub struct GameAssets {
    catalog: TileCatalog,
    lexicon: Lexicon,
}

impl GameAssets {
    pub fn new(catalog: TileCatalog, lexicon: Lexicon) -> Self {
        Self { catalog, lexicon }
    }

    /// Load the tile catalog and word list concurrently.
    ///
    /// Load failures are logged and replaced with empty data: with no catalog
    /// nothing can be drawn, with no lexicon nothing validates.
    pub async fn load(config: &GameConfig) -> Self {
        let (catalog, lexicon) = tokio::join!(
            TileCatalog::load(&config.tiles_path),
            Lexicon::load(&config.dictionary_path)
        );

        let catalog = match catalog {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::error!("Failed to load tile catalog: {}. No tiles can be drawn.", e);
                TileCatalog::empty()
            }
        };

        let lexicon = match lexicon {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!("Failed to load dictionary: {}. Using empty lexicon.", e);
                tracing::warn!(
                    "Place a word list at {} for full functionality",
                    config.dictionary_path
                );
                Lexicon::empty()
            }
        };

        Self::new(catalog, lexicon)
    }

    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub rack_size: usize,
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            rack_size: 7,
            seed: None,
        }
    }
}

impl From<&GameConfig> for SessionSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            rack_size: config.rack_size,
            seed: config.seed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TileView {
    pub letter: Letter,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellView {
    pub index: usize,
    pub role: CellRole,
    pub tile: Option<TileView>,
}

/// Everything the presentation layer needs to draw the game
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub rack: Vec<TileView>,
    pub board: Vec<CellView>,
    pub round_score: u32,
    pub cumulative_score: u32,
    pub message: String,
    pub phase: RoundPhase,
    pub tiles_remaining: usize,
}

/// One player's game: bag, rack, board and the running score
pub struct GameSession {
    id: Uuid,
    assets: Arc<GameAssets>,
    bag: TileBag,
    rack: Rack,
    board: Board,
    engine: RoundEngine,
    round_score: u32,
    cumulative_score: u32,
    message: String,
    rng: StdRng,
}

impl GameSession {
    /// Fill the bag and deal the first rack
    pub fn new(assets: Arc<GameAssets>, settings: SessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut session = Self {
            id: Uuid::new_v4(),
            bag: TileBag::from_catalog(assets.catalog()),
            assets,
            rack: Rack::new(settings.rack_size),
            board: Board::new(),
            engine: RoundEngine::new(),
            round_score: 0,
            cumulative_score: 0,
            message: String::new(),
            rng,
        };

        tracing::info!(
            session_id = %session.id,
            tiles = session.bag.len(),
            "Game session created"
        );

        session.start_round();
        session
    }

    /// Return the hand to the bag and deal a new rack onto an empty board.
    /// Tiles of a scored word are retired instead of returned.
    fn start_round(&mut self) {
        let retired = match self.engine.phase() {
            RoundPhase::Scored(result) => result.consumed.clone(),
            _ => Vec::new(),
        };

        self.bag.put_back(self.rack.take_all());
        self.bag.put_back(self.board.take_all());
        for letter in retired {
            self.bag.remove(letter);
        }

        let drawn = self.bag.draw(self.rack.capacity(), &mut self.rng);
        self.rack.refill(drawn);
        self.engine.reset();
        self.round_score = 0;
        self.message.clear();

        tracing::debug!(
            session_id = %self.id,
            rack = %self.rack_string(),
            bag = self.bag.len(),
            "Round started"
        );
    }

    fn ensure_open(&self) -> Result<(), PlacementError> {
        if self.engine.is_open() {
            Ok(())
        } else {
            Err(PlacementError::RoundClosed)
        }
    }

    /// Move the tile in `rack_slot` onto board cell `cell`
    pub fn place_tile(&mut self, rack_slot: usize, cell: usize) -> Result<(), PlacementError> {
        self.ensure_open()?;
        let letter = self
            .rack
            .tiles()
            .get(rack_slot)
            .copied()
            .ok_or(PlacementError::RackSlotEmpty(rack_slot))?;
        self.board.place(cell, letter)?;
        self.rack.take(rack_slot);
        self.engine.reopen();
        Ok(())
    }

    /// Slide a placed tile to another cell
    pub fn move_tile(&mut self, from: usize, to: usize) -> Result<(), PlacementError> {
        self.ensure_open()?;
        let letter = self
            .board
            .cell(from)
            .ok_or(PlacementError::CellOutOfRange(from))?
            .occupant
            .ok_or(PlacementError::CellEmpty(from))?;
        if from == to {
            return Ok(());
        }
        self.board.place(to, letter)?;
        self.board.clear(from);
        self.engine.reopen();
        Ok(())
    }

    /// Lift a placed tile back onto the rack
    pub fn return_tile(&mut self, cell: usize) -> Result<(), PlacementError> {
        self.ensure_open()?;
        if cell >= BOARD_LEN {
            return Err(PlacementError::CellOutOfRange(cell));
        }
        let letter = self.board.clear(cell).ok_or(PlacementError::CellEmpty(cell))?;
        self.rack.push(letter);
        self.engine.reopen();
        Ok(())
    }

    /// Validate and score the board.
    ///
    /// An invalid word sends every placed tile back to the rack and keeps the
    /// round open. A scored word stays on the board until [`advance_round`].
    ///
    /// [`advance_round`]: GameSession::advance_round
    pub fn submit(&mut self) -> Result<ScoreResult, Rejection> {
        let outcome =
            self.engine
                .submit(&self.board, self.assets.lexicon(), self.assets.catalog());

        match &outcome {
            Ok(result) => {
                self.round_score = result.score;
                self.cumulative_score = self.cumulative_score.saturating_add(result.score);
                self.message = format!("Congratulations! You found the word: {}", result.word);
                tracing::info!(
                    session_id = %self.id,
                    word = %result.word,
                    score = result.score,
                    total = self.cumulative_score,
                    "Word scored"
                );
            }
            // Keep showing the success message while the word is on display
            Err(Rejection::RoundClosed) => {}
            Err(rejection) => {
                self.message = rejection.to_string();
                if let Rejection::InvalidWord(word) = rejection {
                    for letter in self.board.take_all() {
                        self.rack.push(letter);
                    }
                    tracing::debug!(session_id = %self.id, word = %word, "Word rejected");
                }
            }
        }

        outcome
    }

    /// Deal the next round after a scored word. Returns false if nothing was scored.
    pub fn advance_round(&mut self) -> bool {
        if !matches!(self.engine.phase(), RoundPhase::Scored(_)) {
            tracing::debug!(session_id = %self.id, "No scored round to advance");
            return false;
        }
        self.start_round();
        true
    }

    /// New letters without touching the score. Draws from the depleted bag.
    pub fn redraw_rack(&mut self) {
        tracing::debug!(session_id = %self.id, "Redrawing rack");
        self.start_round();
    }

    /// Zero the score and start over with a full bag
    pub fn reset_session(&mut self) {
        self.rack.take_all();
        self.board.take_all();
        self.engine.reset();
        self.bag.refill(self.assets.catalog());
        self.cumulative_score = 0;
        self.start_round();

        tracing::info!(session_id = %self.id, "Session reset");
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            rack: self.rack.tiles().iter().map(|&l| self.tile_view(l)).collect(),
            board: self
                .board
                .cells()
                .iter()
                .map(|cell| CellView {
                    index: cell.index,
                    role: cell.role,
                    tile: cell.occupant.map(|l| self.tile_view(l)),
                })
                .collect(),
            round_score: self.round_score,
            cumulative_score: self.cumulative_score,
            message: self.message.clone(),
            phase: self.engine.phase().clone(),
            tiles_remaining: self.bag.len(),
        }
    }

    fn tile_view(&self, letter: Letter) -> TileView {
        TileView {
            letter,
            value: self.assets.catalog().value_of(letter).unwrap_or_default(),
        }
    }

    fn rack_string(&self) -> String {
        self.rack.tiles().iter().map(|l| l.as_char()).collect()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> &RoundPhase {
        self.engine.phase()
    }

    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    pub fn cumulative_score(&self) -> u32 {
        self.cumulative_score
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tiles_remaining(&self) -> usize {
        self.bag.len()
    }
}
