use serde::{Deserialize, Serialize};

use crate::game::SessionSnapshot;

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Tile dropped from the rack onto a cell
    PlaceTile {
        rack_index: usize,
        cell: usize,
    },
    /// Tile dragged from one cell to another
    MoveTile {
        from: usize,
        to: usize,
    },
    /// Tile dropped back on the rack
    ReturnTile {
        cell: usize,
    },
    Submit,
    Reset,
    Redraw,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    State(SessionSnapshot),
    WordScored {
        word: String,
        score: u32,
        cumulative_score: u32,
    },
    InvalidWord {
        reason: String,
    },
    Error {
        message: String,
    },
}
