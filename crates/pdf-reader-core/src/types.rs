use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("Failed to open document {}: {reason}", path.display())]
    DocumentOpen { path: PathBuf, reason: String },
    #[error("Failed to render page {} at scale {scale:.2}: {reason}", page_index + 1)]
    Render {
        page_index: usize,
        scale: f32,
        reason: String,
    },
    #[error("Progress record {} is unreadable: {reason}", path.display())]
    StoreCorrupt { path: PathBuf, reason: String },
    #[error("Failed to write progress record {}: {source}", path.display())]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReaderError>;
