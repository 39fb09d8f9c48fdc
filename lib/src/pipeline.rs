use tracing::{debug, trace};

use crate::{
    document::Document,
    filter::{Clitics, FilterPipeline, PunctuationSet},
    lexicon::Lexicon,
    normalizer::{CasePolicy, Lemmatizer},
    tagger::{PosTagger, Tagger},
    token::Tagged,
    tokenizer::{Segmenter, SentenceSplitter, Tokenizer},
    unknown::UnknownWords,
};

/// Counters gathered over one run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Report {
    pub sentences: usize,
    pub tokens: usize,
    pub removed: usize,
    pub checked: usize,
    pub unknown: usize,
}

#[derive(Debug)]
pub struct Outcome {
    pub unknown: UnknownWords,
    pub report: Report,
}

/// Segment, tokenize, tag, clean, lemmatize and check one transcript
/// against a reference lexicon.
#[derive(Debug)]
pub struct Pipeline {
    segmenter: Box<dyn SentenceSplitter>,
    tokenizer: Tokenizer,
    tagger: Tagger,
    filters: FilterPipeline,
    lemmatizer: Lemmatizer,
    lexicon: Lexicon,
    case: CasePolicy,
}

impl Pipeline {
    pub fn new(lexicon: Lexicon) -> Self {
        PipelineBuilder::new(lexicon).build()
    }

    pub fn builder(lexicon: Lexicon) -> PipelineBuilder {
        PipelineBuilder::new(lexicon)
    }

    #[inline]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    pub fn case(&self) -> CasePolicy {
        self.case
    }

    /// Lemma of `tagged` if neither the word nor its lemma is in the lexicon.
    pub fn classify(&self, tagged: &Tagged) -> Option<String> {
        let word = tagged.token().as_str();
        let surface = self.case.apply(word);
        let lemma = self
            .lemmatizer
            .lemmatize(&surface, tagged.pos(), &self.lexicon);

        if self.lexicon.contains(word) || self.lexicon.contains(&lemma) {
            None
        } else {
            Some(lemma)
        }
    }

    pub fn run(&mut self, document: &Document) -> Outcome {
        let mut unknown = UnknownWords::new();
        let mut report = Report::default();

        for sentence in document.sentences(self.segmenter.as_ref()) {
            report.sentences += 1;

            let tokens = self.tokenizer.tokenize(sentence);
            report.tokens += tokens.count();

            let mut tagged = self.tagger.tag(tokens);
            report.removed += self.filters.run(&mut tagged);

            for tagged in &tagged {
                report.checked += 1;

                if let Some(lemma) = self.classify(tagged) {
                    trace!(word = tagged.token().as_str(), tag = %tagged.tag(), %lemma, "unknown word");
                    unknown.insert(lemma);
                }
            }
        }

        report.unknown = unknown.len();
        debug!(?report, lexicon = self.lexicon.name(), "pipeline finished");

        Outcome { unknown, report }
    }
}

pub struct PipelineBuilder {
    lexicon: Lexicon,
    segmenter: Option<Box<dyn SentenceSplitter>>,
    tokenizer: Option<Tokenizer>,
    tagger: Option<Tagger>,
    filters: Option<FilterPipeline>,
    punctuation: PunctuationSet,
    clitics: bool,
    case: CasePolicy,
}

impl PipelineBuilder {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            segmenter: None,
            tokenizer: None,
            tagger: None,
            filters: None,
            punctuation: PunctuationSet::default(),
            clitics: false,
            case: CasePolicy::default(),
        }
    }

    pub fn segmenter<S: SentenceSplitter + 'static>(mut self, segmenter: S) -> Self {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn tagger<T: PosTagger + 'static>(mut self, tagger: T) -> Self {
        self.tagger = Some(Tagger::new(tagger));
        self
    }

    /// Replaces the standard cleaner and the optional clitic filter.
    pub fn filters(mut self, filters: FilterPipeline) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn punctuation(mut self, punctuation: PunctuationSet) -> Self {
        self.punctuation = punctuation;
        self
    }

    /// Also drop contraction fragments (`n't`, `'s`) before lookup.
    pub fn clitics(mut self, drop: bool) -> Self {
        self.clitics = drop;
        self
    }

    pub fn case(mut self, case: CasePolicy) -> Self {
        self.case = case;
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Box::new(Segmenter::new()) as Box<dyn SentenceSplitter>),
            tokenizer: self.tokenizer.unwrap_or_default(),
            tagger: self.tagger.unwrap_or_default(),
            filters: self.filters.unwrap_or_else(|| {
                let mut filters = FilterPipeline::standard(self.punctuation);
                if self.clitics {
                    filters.insert(Box::new(Clitics::new()));
                }
                filters
            }),
            lemmatizer: Lemmatizer::new(),
            lexicon: self.lexicon,
            case: self.case,
        }
    }
}
