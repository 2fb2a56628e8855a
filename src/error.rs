use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read document '{path}'")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write document '{path}'")]
    WriteDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory '{path}'")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Index markers <!-- INDEX-START --> / <!-- INDEX-END --> not found in '{path}'")]
    MissingMarkers { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;
