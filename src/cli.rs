extern crate clap;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{
    config::{CaseMode, Config, CorpusLayout, PunctuationMode, SortMode},
    write::OutputFormat,
};

/// Report the words of a transcript that no reference corpus knows.
#[derive(Debug, Parser)]
#[command(name = "lexsift", version)]
pub struct Cli {
    /// Transcript to scan (UTF-8 text).
    pub transcript: PathBuf,

    /// Output file [default: ./output.txt]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Reference corpus [default: /usr/share/dict/words]. The default file
    /// ships with the system `words` package; without it pass a list here.
    #[arg(long, short = 'c', env = "LEXSIFT_CORPUS")]
    pub corpus: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub corpus_format: Option<CorpusLayout>,

    /// Extra word list of known words; repeatable.
    #[arg(long, short = 'a')]
    pub allow: Vec<PathBuf>,

    #[arg(long, value_enum)]
    pub case: Option<CaseMode>,

    #[arg(long, value_enum)]
    pub punctuation: Option<PunctuationMode>,

    /// Skip contraction fragments (`n't`, `'s`) instead of reporting them.
    #[arg(long)]
    pub drop_clitics: bool,

    #[arg(long, value_enum)]
    pub order: Option<SortMode>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON configuration file; flags take precedence over it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug).
    #[arg(long, short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Lays the flags that were given over `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(corpus) = &self.corpus {
            config.corpus = corpus.clone();
        }
        if let Some(layout) = self.corpus_format {
            config.corpus_format = layout;
        }
        if let Some(case) = self.case {
            config.case = case;
        }
        if let Some(punctuation) = self.punctuation {
            config.punctuation = punctuation;
        }
        if self.drop_clitics {
            config.drop_clitics = true;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        config.allow.extend(self.allow.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use crate::{
        cli::Cli,
        config::{CaseMode, Config, SortMode},
        write::OutputFormat,
    };

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_minimal() {
        let cli = Cli::try_parse_from(["lexsift", "talk.txt"]).unwrap();

        assert_eq!(cli.transcript, PathBuf::from("talk.txt"));
        assert!(cli.output.is_none());
        assert!(!cli.drop_clitics);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_missing_transcript() {
        assert!(Cli::try_parse_from(["lexsift"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "lexsift",
            "talk.txt",
            "-o",
            "out/unknown.json",
            "--case",
            "preserve",
            "--order",
            "encounter",
            "--format",
            "json",
            "-a",
            "names.txt",
            "-a",
            "jargon.txt",
            "--drop-clitics",
            "-vv",
        ])
        .unwrap();

        let mut config = Config {
            allow: vec![PathBuf::from("base.txt")],
            ..Config::default()
        };
        cli.apply(&mut config);

        assert_eq!(config.output, PathBuf::from("out/unknown.json"));
        assert_eq!(config.case, CaseMode::Preserve);
        assert_eq!(config.order, SortMode::Encounter);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.allow.len(), 3);
        assert!(config.drop_clitics);
        assert_eq!(cli.verbose, 2);
    }
}
