/// Errors from the parts of the library that deal with the outside world.
///
/// The physics functions are total over their inputs and never produce these.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No key code for {0:?}")]
    UnknownKey(String),
    #[error("Failed to read the config file")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse the config file")]
    Config(#[from] ron::error::SpannedError),
    #[error("Invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
