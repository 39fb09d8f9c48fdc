use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use lexsift::{
    corpus::CorpusFormat, filter::PunctuationSet, normalizer::CasePolicy, unknown::OutputOrder,
};

use crate::{
    error::{ConfigError, IoError},
    read,
    write::OutputFormat,
};

pub const DEFAULT_OUTPUT: &str = "./output.txt";
pub const DEFAULT_CORPUS: &str = "/usr/share/dict/words";

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CorpusLayout {
    /// One word per line.
    #[default]
    Words,
    /// Running prose.
    Text,
}

impl From<CorpusLayout> for CorpusFormat {
    fn from(layout: CorpusLayout) -> Self {
        match layout {
            CorpusLayout::Words => CorpusFormat::WordList,
            CorpusLayout::Text => CorpusFormat::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Report lower-cased lemmas.
    #[default]
    Lowercase,
    /// Report lemmas in the transcript's casing.
    Preserve,
}

impl From<CaseMode> for CasePolicy {
    fn from(mode: CaseMode) -> Self {
        match mode {
            CaseMode::Lowercase => CasePolicy::Lowercase,
            CaseMode::Preserve => CasePolicy::Preserve,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationMode {
    /// ASCII digits and punctuation.
    Ascii,
    /// Unicode digits, punctuation and symbols.
    #[default]
    Unicode,
}

impl From<PunctuationMode> for PunctuationSet {
    fn from(mode: PunctuationMode) -> Self {
        match mode {
            PunctuationMode::Ascii => PunctuationSet::Ascii,
            PunctuationMode::Unicode => PunctuationSet::Unicode,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Sorted,
    Encounter,
}

impl From<SortMode> for OutputOrder {
    fn from(mode: SortMode) -> Self {
        match mode {
            SortMode::Sorted => OutputOrder::Sorted,
            SortMode::Encounter => OutputOrder::Encounter,
        }
    }
}

/// Run settings. Every field is optional in a config file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: PathBuf,
    pub corpus: PathBuf,
    pub corpus_format: CorpusLayout,
    pub allow: Vec<PathBuf>,
    pub case: CaseMode,
    pub punctuation: PunctuationMode,
    pub drop_clitics: bool,
    pub order: SortMode,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            corpus: PathBuf::from(DEFAULT_CORPUS),
            corpus_format: CorpusLayout::default(),
            allow: Vec::new(),
            case: CaseMode::default(),
            punctuation: PunctuationMode::default(),
            drop_clitics: false,
            order: SortMode::default(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|error| ConfigError::Serialization(error.to_string()))
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = read::read_to_string(path).await.map_err(|error| match error {
            IoError::Read { path, kind } | IoError::Write { path, kind } => {
                ConfigError::File { path, kind }
            }
            IoError::Encoding(message) => ConfigError::Serialization(message),
        })?;

        Self::from_json(&json)
    }
}
