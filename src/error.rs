/// Custom error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported encoding: {}", _0)]
    UnsupportedEncoding(String),
    #[error("{}", _0)]
    Hex(#[from] hex::FromHexError),
    #[error("input is not valid ascii")]
    NotAscii,
}

pub type Result<T> = std::result::Result<T, Error>;
