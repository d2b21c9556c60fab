//! Single-player word-tile game: a rack of drawn letters, a seven-cell row with
//! letter and word multipliers, dictionary validation and a running score.
//!
//! The rules live in [`game`] and are fully synchronous. [`routes`] and
//! [`websocket`] serve the browser frontend and drive one [`game::GameSession`]
//! per connection.

pub mod config;
pub mod error;
pub mod game;
pub mod lexicon;
pub mod models;
pub mod routes;
pub mod websocket;

use std::sync::Arc;

use config::Config;
use game::GameAssets;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Tile catalog and lexicon, loaded before the first connection is accepted
    pub assets: Arc<GameAssets>,
}
