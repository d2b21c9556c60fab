use std::path::PathBuf;

/// Failure to read one of the startup data files
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tile catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tile catalog has no \"pieces\" object")]
    MissingPieces,
}
