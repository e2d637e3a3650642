use std::path::PathBuf;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures that end a scrape run (or a single image when continuing on error)
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("No images found in the HTML.")]
    NoImagesFound,

    #[error("image URL has no file name: {0}")]
    NoFileName(String),

    #[error("failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    pub fn fetch(url: &str, source: impl Into<BoxError>) -> Self {
        ScrapeError::Fetch {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
