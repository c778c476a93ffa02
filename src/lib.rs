// Salient: keyphrase extraction for a script measured against transcripts.
//
// This is the library root. Data flows one way through the modules:
// text -> corpus -> scoring -> pipeline -> output.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod text;

pub use error::{Result, SalientError};
