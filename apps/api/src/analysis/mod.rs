// Text analysis & matching engine.
// normalize → tokenize → stopword filter → count → rank/cap/match → report.
// Everything except `document` and `handlers` is pure and synchronous.

pub mod document;
pub mod engine;
pub mod extractor;
pub mod frequency;
pub mod handlers;
pub mod matcher;
pub mod normalizer;
pub mod report;
pub mod stopwords;
