extern crate thiserror;

use thiserror::Error;

/// Library error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Corpus Error: {0}")]
    Corpus(#[from] CorpusError),
}

/// Reference corpus errors.
#[derive(Debug, Error, PartialEq)]
pub enum CorpusError {
    #[error("corpus `{name}` contains no words")]
    Empty { name: String },
}
