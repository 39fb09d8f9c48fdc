use std::path::{Path, PathBuf};

use tracing::{debug, info};

use lexsift::{
    corpus::{CorpusFormat, WordList, WordSource},
    document::Document,
    lexicon::Lexicon,
    normalizer::NormalizerPipeline,
    pipeline::{Pipeline, Report},
};

use crate::{config::Config, error::Error, read, write};

/// What one run produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub words: Vec<String>,
    pub report: Report,
    pub output: PathBuf,
}

/// Loads the reference corpus, scans one transcript and writes the unknown
/// words it finds.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reference corpus merged with every allow list.
    pub async fn load_lexicon(&self) -> Result<Lexicon, Error> {
        let corpus = &self.config.corpus;
        let text = read::read_to_string(corpus).await?;

        let mut source = CorpusFormat::from(self.config.corpus_format)
            .source(corpus.display().to_string(), text);
        let mut lexicon = Lexicon::load(source.as_mut(), &mut NormalizerPipeline::corpus())?;

        for path in &self.config.allow {
            let text = read::read_to_string(path).await?;
            let mut list = WordList::new(path.display().to_string(), text);
            let words = list.words();

            debug!(allow = %path.display(), words = words.count(), "merging allow list");
            lexicon.extend(words);
        }

        info!(corpus = lexicon.name(), words = lexicon.len(), "reference corpus ready");
        Ok(lexicon)
    }

    /// Nothing is written unless both the corpus and the transcript load.
    pub async fn run<P: AsRef<Path>>(&self, transcript: P) -> Result<Summary, Error> {
        let lexicon = self.load_lexicon().await?;
        let document = Document::from(read::read_to_string(transcript.as_ref()).await?);

        let mut pipeline = Pipeline::builder(lexicon)
            .case(self.config.case.into())
            .punctuation(self.config.punctuation.into())
            .clitics(self.config.drop_clitics)
            .build();

        let outcome = pipeline.run(&document);
        let words = outcome.unknown.into_ordered(self.config.order.into());

        let rendered = self.config.format.render(&words)?;
        write::write_file(&self.config.output, &rendered).await?;

        info!(
            transcript = %transcript.as_ref().display(),
            output = %self.config.output.display(),
            sentences = outcome.report.sentences,
            tokens = outcome.report.tokens,
            unknown = outcome.report.unknown,
            "wrote unknown words"
        );

        Ok(Summary {
            words,
            report: outcome.report,
            output: self.config.output.clone(),
        })
    }
}
