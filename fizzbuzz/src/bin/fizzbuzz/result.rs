use thiserror::Error;

pub(crate) type FizzBuzzResult<T> = Result<T, FizzBuzzError>;

#[derive(Error, Debug)]
pub(crate) enum FizzBuzzError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
}
