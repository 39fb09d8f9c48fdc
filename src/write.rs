use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use tokio::{fs, io::AsyncWriteExt};

use crate::error::IoError;

/// How the unknown words are laid out in the output file.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One word per line.
    #[default]
    Lines,
    /// A JSON array of strings.
    Json,
}

impl OutputFormat {
    pub fn render<S: AsRef<str> + serde::Serialize>(&self, words: &[S]) -> Result<String, IoError> {
        match self {
            OutputFormat::Lines => Ok(words.iter().fold(String::new(), |mut out, word| {
                out.push_str(word.as_ref());
                out.push('\n');
                out
            })),

            OutputFormat::Json => serde_json::to_string_pretty(words)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|error| IoError::Encoding(error.to_string())),
        }
    }
}

/// Writes `contents` to `path`, creating missing parent directories first.
pub async fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), IoError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|error| IoError::write(parent, &error))?;
    }

    let mut file = fs::File::create(path)
        .await
        .map_err(|error| IoError::write(path, &error))?;

    file.write_all(contents.as_bytes())
        .await
        .map_err(|error| IoError::write(path, &error))?;

    file.flush()
        .await
        .map_err(|error| IoError::write(path, &error))
}

#[cfg(test)]
mod tests {
    use super::{write_file, OutputFormat};

    #[test]
    fn test_render_lines() {
        let rendered = OutputFormat::Lines.render(&["alpha", "beta"]).unwrap();
        assert_eq!(rendered, "alpha\nbeta\n");

        let empty: [&str; 0] = [];
        assert_eq!(OutputFormat::Lines.render(&empty).unwrap(), "");
    }

    #[test]
    fn test_render_json() {
        let rendered = OutputFormat::Json.render(&["alpha", "beta"]).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn test_write_file_creates_parents() {
        let root = std::env::temp_dir().join(format!("lexsift-write-{}", std::process::id()));
        let path = root.join("nested").join("out.txt");

        write_file(&path, "word\n").await.unwrap();

        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "word\n");
        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
