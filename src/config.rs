use anyhow::{Context, Result};
use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the browser frontend
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub tiles_path: String,
    pub rack_size: usize,
    /// Pause between a scored word and the next deal
    pub round_advance_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary_path: "./data/words.txt".to_string(),
            tiles_path: "./data/pieces.json".to_string(),
            rack_size: 7,
            round_advance_delay: Duration::from_millis(2000),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a number")?,
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "./frontend".to_string()),
        };

        let defaults = GameConfig::default();
        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or(defaults.dictionary_path),
            tiles_path: env::var("TILES_PATH")
                .unwrap_or(defaults.tiles_path),
            rack_size: env::var("RACK_SIZE")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .context("RACK_SIZE must be a number")?,
            round_advance_delay: Duration::from_millis(
                env::var("ROUND_ADVANCE_DELAY_MS")
                    .unwrap_or_else(|_| "2000".to_string())
                    .parse()
                    .context("ROUND_ADVANCE_DELAY_MS must be a number of milliseconds")?,
            ),
            seed: env::var("GAME_SEED")
                .ok()
                .map(|seed| seed.parse())
                .transpose()
                .context("GAME_SEED must be an unsigned integer")?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
