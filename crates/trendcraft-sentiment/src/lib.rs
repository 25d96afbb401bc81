//! Word-bank sentiment scoring for audience feedback.
//!
//! [`analyze_text`] scores a single text, [`analyze_batch`] aggregates many,
//! and [`render_report`] formats a batch result for the terminal.

mod batch;
mod lexicon;
mod report;
mod scorer;

pub use batch::{analyze_batch, BatchSentiment, OverallSentiment, SentimentDistribution};
pub use report::render_report;
pub use scorer::{analyze_text, Sentiment, TextSentiment};
