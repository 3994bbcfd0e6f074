// Heuristic résumé parsing.
// Every extractor here is a pure function over the extracted text (or its lines);
// none of them share state, and a miss is reported as a sentinel, never an error.

pub mod entries;
pub mod fields;
pub mod lexicon;
pub mod lists;
pub mod parser;
pub mod sections;
pub mod summary;
