pub mod corpus;
pub mod document;
pub mod error;
pub mod filter;
pub mod inflection;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod pos;
pub mod tagger;
pub mod token;
pub mod tokenizer;
pub mod unknown;
