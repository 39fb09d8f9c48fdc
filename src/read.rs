use std::path::{Path, PathBuf};

use tokio::{fs::File, io::AsyncReadExt};

use crate::error::IoError;

/// Reads a whole UTF-8 file through tokio.
#[derive(Debug, Default)]
pub struct FileReader {
    inner: Option<File>,
    path: PathBuf,
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<(), IoError> {
        let path = path.as_ref().to_path_buf();

        match File::open(&path).await {
            Ok(file) => {
                self.inner = Some(file);
                self.path = path;
                Ok(())
            }
            Err(error) => Err(IoError::read(path, &error)),
        }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_into(&mut self, buffer: &mut String) -> Result<usize, IoError> {
        match &mut self.inner {
            Some(reader) => reader
                .read_to_string(buffer)
                .await
                .map_err(|error| IoError::read(&self.path, &error)),

            None => Err(IoError::Read {
                path: self.path.clone(),
                kind: std::io::ErrorKind::InvalidInput,
            }),
        }
    }
}

/// Opens `path` and reads it to the end.
pub async fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, IoError> {
    let mut reader = FileReader::new();
    let mut buffer = String::new();

    reader.open(path).await?;
    reader.read_into(&mut buffer).await?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use crate::{
        error::IoError,
        read::{read_to_string, FileReader},
    };

    #[tokio::test]
    async fn test_reader_file_open() {
        let mut buffer = String::new();
        let mut reader = FileReader::new();

        reader.open("tests/data/sample.txt").await.unwrap();
        let read = reader.read_into(&mut buffer).await.unwrap();

        assert_eq!(read, buffer.len());
        assert!(buffer.contains("Flibbertigibbet"));
        assert!(reader.path().ends_with("sample.txt"));
    }

    #[tokio::test]
    async fn test_reader_missing_file() {
        let error = read_to_string("tests/data/does-not-exist.txt")
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            IoError::Read {
                kind: ErrorKind::NotFound,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_reader_unopened() {
        let mut buffer = String::new();
        let mut reader = FileReader::new();

        assert!(reader.read_into(&mut buffer).await.is_err());
    }
}
