use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no character category selected")]
    EmptyAlphabet,
    #[error("not a number: {0}")]
    InvalidNumber(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("no password number {0}")]
    NoSuchPassword(usize),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
