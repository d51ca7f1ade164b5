pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("tileset must contain at least one glyph")]
    EmptyTileSet,

    #[error("unknown tileset: {0}")]
    UnknownTileSet(String),

    #[error("invalid hex fingerprint: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
