use std::path::{Path, PathBuf};

use lexsift_repo::config::Config;

pub(crate) const WORDS: &str = "tests/data/words.txt";
pub(crate) const SAMPLE: &str = "tests/data/sample.txt";

/// Fresh scratch directory unique to one test.
pub(crate) fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("lexsift-it-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub(crate) fn write_transcript(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("transcript.txt");
    std::fs::write(&path, text).unwrap();
    path
}

pub(crate) fn config(output: PathBuf) -> Config {
    Config {
        output,
        corpus: PathBuf::from(WORDS),
        ..Config::default()
    }
}

pub(crate) fn lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(ToString::to_string)
        .collect()
}
