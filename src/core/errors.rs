use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed theme: field `{field}`: {reason}")]
    MalformedTheme { field: &'static str, reason: String },
    #[error("malformed palette: {0}")]
    MalformedPalette(String),
    #[error("unknown toolkit identifier: {0}")]
    UnknownToolkitIdentifier(String),
    #[error("unknown flavour: {0}")]
    UnknownFlavour(String),
    #[error("cannot save over a built-in theme; pick an explicit destination with save_as")]
    CannotSaveOverDefaultTheme,
    #[error("no theme loaded")]
    ThemeNotLoaded,
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
