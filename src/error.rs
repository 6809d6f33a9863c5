use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} environment variable not set")]
    MissingConfig(&'static str),

    #[error("failed to open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading file")]
    Read(#[source] std::io::Error),

    #[error("no phrases found in file")]
    NoPhrases,

    #[error("failed to marshal JSON")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to send request")]
    Request(#[source] reqwest::Error),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
}
