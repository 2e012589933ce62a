//! # extractsum-text
//!
//! Turns raw document text into the ordered sentence table every later
//! stage is keyed on, and tags sentences with rhetorical keyword categories.

pub mod keyword_tagger;
pub mod normalize;
pub mod segmenter;
pub mod sentence_splitter;

pub use keyword_tagger::{tag_sentence, tag_sentences};
pub use segmenter::Segmenter;
