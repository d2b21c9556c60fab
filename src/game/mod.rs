// Game engine modules

pub mod bag;
pub mod board;
pub mod catalog;
pub mod rack;
pub mod round;
pub mod session;

pub use board::PlacementError;
pub use catalog::TileCatalog;
pub use round::Rejection;
pub use session::{GameAssets, GameSession, SessionSettings, SessionSnapshot};
