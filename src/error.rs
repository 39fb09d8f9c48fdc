extern crate thiserror;

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Corpus(#[from] lexsift::error::Error),
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Config File Error: {}: {kind}", .path.display())]
    File { path: PathBuf, kind: io::ErrorKind },

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("Read Error: {}: {kind}", .path.display())]
    Read { path: PathBuf, kind: io::ErrorKind },

    #[error("Write Error: {}: {kind}", .path.display())]
    Write { path: PathBuf, kind: io::ErrorKind },

    #[error("Encoding Error: {0}")]
    Encoding(String),
}

impl IoError {
    pub fn read<P: Into<PathBuf>>(path: P, error: &io::Error) -> Self {
        Self::Read {
            path: path.into(),
            kind: error.kind(),
        }
    }

    pub fn write<P: Into<PathBuf>>(path: P, error: &io::Error) -> Self {
        Self::Write {
            path: path.into(),
            kind: error.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{ConfigError, Error, IoError};

    #[test]
    fn test_error_display_carries_path() {
        let error = IoError::read("missing.txt", &io::Error::from(io::ErrorKind::NotFound));

        assert!(error.to_string().contains("missing.txt"));
        assert!(matches!(
            error,
            IoError::Read {
                kind: io::ErrorKind::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn test_error_from_conversions() {
        let error: Error = ConfigError::Serialization("bad".into()).into();
        assert!(matches!(error, Error::Config(ConfigError::Serialization(_))));

        let corpus = lexsift::error::CorpusError::Empty {
            name: "words".into(),
        };
        let error: Error = lexsift::error::Error::from(corpus).into();
        assert!(error.to_string().contains("words"));
    }
}
