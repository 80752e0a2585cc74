use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cyclic value: {0}")]
    CyclicValue(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::CyclicValue(_) => "CYCLIC_VALUE",
            Error::InvalidPath(_) => "INVALID_PATH",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
            Error::Other(_) => "ERROR",
        }
    }
}
